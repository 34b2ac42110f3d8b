use std::collections::HashSet;

use serde::Serialize;

use crate::{repository::Repository, shared::Coordinate};

/// Used when a route has no color of its own.
pub const DEFAULT_ROUTE_COLOR: &str = "000000";

/// One drawn path of a route. Routes usually have one per direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteShape<'a> {
    pub shape_id: &'a str,
    /// 6 hex digits, no leading `#`.
    pub color: &'a str,
    pub points: &'a [Coordinate],
}

impl RouteShape<'_> {
    /// The color as a CSS hex value.
    pub fn css_color(&self) -> String {
        format!("#{}", self.color)
    }
}

impl Repository {
    /// The path of a trip, ordered by point sequence.
    /// Empty if the trip is unknown or has no shape.
    pub fn shape_by_trip_id(&self, trip_id: &str) -> &[Coordinate] {
        self.trip_by_id(trip_id)
            .and_then(|trip| trip.shape_id.as_deref())
            .map(|shape_id| self.shape_by_id(shape_id))
            .unwrap_or_default()
    }

    /// One entry per distinct shape used by the route's trips, in order of
    /// first use. Shapes without points are left out.
    pub fn shapes_by_route_id(&self, route_id: &str) -> Vec<RouteShape<'_>> {
        let Some(route) = self.route_by_id(route_id) else {
            return Vec::new();
        };
        let color = route.color.as_deref().unwrap_or(DEFAULT_ROUTE_COLOR);

        let mut seen: HashSet<&str> = HashSet::new();
        self.trips_by_route_id(route_id)
            .into_iter()
            .filter_map(|trip| trip.shape_id.as_deref())
            .filter(|shape_id| seen.insert(*shape_id))
            .filter_map(|shape_id| {
                let points = self.shape_by_id(shape_id);
                if points.is_empty() {
                    None
                } else {
                    Some(RouteShape {
                        shape_id,
                        color,
                        points,
                    })
                }
            })
            .collect()
    }
}
