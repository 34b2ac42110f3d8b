use std::sync::Arc;

use chrono::Weekday;

use crate::shared::{Coordinate, Time};

/// The operator publishing the feed.
#[derive(Debug, Default, Clone)]
pub struct Agency {
    pub id: Option<Arc<str>>,
    pub name: Arc<str>,
    pub url: Option<Arc<str>>,
    pub timezone: Option<Arc<str>>,
}

/// A line as riders know it (e.g. "1", "Gare - Quévert").
#[derive(Debug, Default, Clone)]
pub struct Route {
    /// The global internal index used for O(1) array lookups in the repository.
    pub index: u32,
    pub id: Arc<str>,
    pub short_name: Arc<str>,
    pub long_name: Arc<str>,
    /// 6 hex digits, no leading `#`.
    pub color: Option<Arc<str>>,
    pub text_color: Option<Arc<str>>,
}

/// A physical point where passengers can board or alight from a vehicle.
///
/// Names are not unique: a feed often carries one stop per platform or
/// direction, all sharing the same display name.
#[derive(Debug, Default, Clone)]
pub struct Stop {
    pub index: u32,
    pub id: Arc<str>,
    /// Human-readable name (e.g. "Place Duclos").
    pub name: Arc<str>,
    /// Lowercased name, used to group stops sharing a name.
    pub normalized_name: Arc<str>,
    pub coordinate: Coordinate,
}

/// A specific journey taken by a vehicle through a sequence of stops.
#[derive(Debug, Default, Clone)]
pub struct Trip {
    pub index: u32,
    pub id: Arc<str>,
    pub route_id: Arc<str>,
    pub service_id: Arc<str>,
    pub headsign: Option<Arc<str>>,
    pub shape_id: Option<Arc<str>>,
}

/// Individual event within a trip where a vehicle calls at a stop.
#[derive(Debug, Default, Clone)]
pub struct StopTime {
    pub index: u32,
    pub trip_id: Arc<str>,
    pub stop_id: Arc<str>,
    /// Sort key within the trip. Not guaranteed to start at 0 or be contiguous.
    pub sequence: u32,
    /// `None` when the feed cell is not a valid clock value.
    pub arrival_time: Option<Time>,
    pub departure_time: Option<Time>,
}

/// Which days a service runs, between two inclusive `YYYYMMDD` dates.
#[derive(Debug, Default, Clone)]
pub struct Calendar {
    pub service_id: Arc<str>,
    /// Monday first.
    pub days: [bool; 7],
    pub start_date: Arc<str>,
    pub end_date: Arc<str>,
}

impl Calendar {
    pub fn runs_on(&self, weekday: Weekday) -> bool {
        self.days[weekday.num_days_from_monday() as usize]
    }

    /// `on_date` must be `YYYYMMDD`; the fixed width makes string order
    /// match date order.
    pub fn is_active(&self, on_date: &str, weekday: Weekday) -> bool {
        *self.start_date <= *on_date && *on_date <= *self.end_date && self.runs_on(weekday)
    }
}

/// One point of a shape polyline.
#[derive(Debug, Default, Clone)]
pub struct ShapePoint {
    pub shape_id: Arc<str>,
    pub coordinate: Coordinate,
    pub sequence: u32,
}
