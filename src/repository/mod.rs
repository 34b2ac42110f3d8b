use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
    sync::Arc,
};

mod calendar;
mod departures;
mod entities;
mod geometry;
mod headsign;
mod source;

pub use departures::*;
pub use entities::*;
pub use geometry::*;
pub use headsign::*;

use crate::shared::Coordinate;

type IdToIndex = HashMap<Arc<str>, u32>;
type IdToIndexes = HashMap<Arc<str>, Box<[u32]>>;

/// The immutable, indexed snapshot of one feed.
///
/// Tables keep file order. Lookups are built once in
/// [`Repository::load_gtfs`] and never change afterwards. Foreign keys are
/// not checked: a row pointing at a missing record is kept, and queries
/// skip it when the join fails.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub agencies: Box<[Agency]>,
    pub routes: Box<[Route]>,
    pub stops: Box<[Stop]>,
    pub trips: Box<[Trip]>,
    pub stop_times: Box<[StopTime]>,
    pub calendars: Box<[Calendar]>,
    pub shapes: Box<[ShapePoint]>,

    stop_lookup: IdToIndex,
    route_lookup: IdToIndex,
    trip_lookup: IdToIndex,
    name_to_stops: IdToIndexes,
    route_to_trips: IdToIndexes,
    trip_to_stop_times: IdToIndexes,
    stop_to_stop_times: IdToIndexes,
    shape_lookup: HashMap<Arc<str>, Box<[Coordinate]>>,
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    /// Get a stop with the given id.
    /// If the feed lists the id twice, the first row wins.
    pub fn stop_by_id(&self, id: &str) -> Option<&Stop> {
        let index = self.stop_lookup.get(id)?;
        Some(&self.stops[*index as usize])
    }

    pub fn route_by_id(&self, id: &str) -> Option<&Route> {
        let index = self.route_lookup.get(id)?;
        Some(&self.routes[*index as usize])
    }

    pub fn trip_by_id(&self, id: &str) -> Option<&Trip> {
        let index = self.trip_lookup.get(id)?;
        Some(&self.trips[*index as usize])
    }

    /// All trips referencing the route, in file order.
    pub fn trips_by_route_id(&self, route_id: &str) -> Vec<&Trip> {
        self.route_to_trips
            .get(route_id)
            .map(|trips| trips.iter().map(|i| &self.trips[*i as usize]).collect())
            .unwrap_or_default()
    }

    /// All stop times of a trip, in file order.
    pub fn stop_times_by_trip_id(&self, trip_id: &str) -> Vec<&StopTime> {
        self.trip_to_stop_times
            .get(trip_id)
            .map(|idxs| idxs.iter().map(|i| &self.stop_times[*i as usize]).collect())
            .unwrap_or_default()
    }

    /// All stop times calling at a stop, in file order.
    pub fn stop_times_by_stop_id(&self, stop_id: &str) -> Vec<&StopTime> {
        self.stop_to_stop_times
            .get(stop_id)
            .map(|idxs| idxs.iter().map(|i| &self.stop_times[*i as usize]).collect())
            .unwrap_or_default()
    }

    pub(crate) fn stop_time_indexes_by_stop_id(&self, stop_id: &str) -> &[u32] {
        self.stop_to_stop_times
            .get(stop_id)
            .map(|idxs| idxs.as_ref())
            .unwrap_or_default()
    }

    /// The ordered points of a shape, empty if the shape is unknown.
    pub fn shape_by_id(&self, shape_id: &str) -> &[Coordinate] {
        self.shape_lookup
            .get(shape_id)
            .map(|points| points.as_ref())
            .unwrap_or_default()
    }

    /// Every stop id whose name matches the given stop's name, ignoring case.
    /// The given stop is part of the result. Unknown stops give an empty list.
    pub fn sibling_stop_ids(&self, stop_id: &str) -> Vec<Arc<str>> {
        let Some(stop) = self.stop_by_id(stop_id) else {
            return Vec::new();
        };
        let Some(siblings) = self.name_to_stops.get(&stop.normalized_name) else {
            return Vec::new();
        };
        let mut seen: HashSet<&str> = HashSet::new();
        let mut ids = Vec::with_capacity(siblings.len());
        for index in siblings.iter() {
            let id = &self.stops[*index as usize].id;
            if seen.insert(id.as_ref()) {
                ids.push(id.clone());
            }
        }
        ids
    }

    /// The stop with the highest `stop_sequence` of the trip.
    /// On equal sequences the first row in the file wins.
    pub fn terminus_by_trip_id(&self, trip_id: &str) -> Option<&Stop> {
        let last = self
            .stop_times_by_trip_id(trip_id)
            .into_iter()
            .reduce(|best, st| if st.sequence > best.sequence { st } else { best })?;
        self.stop_by_id(&last.stop_id)
    }

    /// Short names of the lines calling at a stop.
    ///
    /// Numeric names come first in numeric order, the rest follow in text order.
    pub fn lines_by_stop_id(&self, stop_id: &str) -> Vec<&str> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut lines: Vec<&str> = self
            .stop_times_by_stop_id(stop_id)
            .into_iter()
            .filter_map(|st| self.trip_by_id(&st.trip_id))
            .filter_map(|trip| self.route_by_id(&trip.route_id))
            .map(|route| route.short_name.as_ref())
            .filter(|name| seen.insert(*name))
            .collect();
        lines.sort_by(|a, b| compare_line_names(a, b));
        lines
    }
}

fn compare_line_names(a: &str, b: &str) -> Ordering {
    match (leading_number(a), leading_number(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// The number a line name starts with, so "10A" ranks as 10.
fn leading_number(name: &str) -> Option<u64> {
    let name = name.trim_start();
    let end = name
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(name.len());
    name[..end].parse().ok()
}
