use crate::{
    gtfs::{
        GtfsAgency, GtfsCalendar, GtfsData, GtfsRoute, GtfsShape, GtfsStop, GtfsStopTime,
        GtfsTrip,
    },
    repository::{
        Agency, Calendar, IdToIndex, IdToIndexes, Repository, Route, ShapePoint, Stop, StopTime,
        Trip,
    },
    shared::{Coordinate, Time, coerce},
};
use rayon::prelude::*;
use std::{collections::HashMap, sync::Arc, time::Instant};
use tracing::debug;

impl Repository {
    /// Builds the tables and every lookup from parsed feed rows.
    pub fn load_gtfs(mut self, data: GtfsData) -> Self {
        let now = Instant::now();
        let GtfsData {
            agency,
            routes,
            stops,
            trips,
            stop_times,
            calendar,
            shapes,
        } = data;
        self.agencies = agency.into_iter().map(Agency::from).collect();
        self.load_stops(stops);
        self.load_routes(routes);
        self.load_trips(trips);
        self.load_stop_times(stop_times);
        self.calendars = calendar.into_iter().map(Calendar::from).collect();
        self.load_shapes(shapes);
        debug!("Building repository took {:?}", now.elapsed());
        self
    }

    fn load_stops(&mut self, stops: Vec<GtfsStop>) {
        debug!("Loading stops...");
        let now = Instant::now();
        let mut stop_lookup: IdToIndex = HashMap::new();
        let mut name_to_stops: HashMap<Arc<str>, Vec<u32>> = HashMap::new();
        let stops: Vec<Stop> = stops
            .into_iter()
            .enumerate()
            .map(|(i, stop)| {
                let mut value: Stop = stop.into();
                value.index = i as u32;
                stop_lookup.entry(value.id.clone()).or_insert(value.index);
                name_to_stops
                    .entry(value.normalized_name.clone())
                    .or_default()
                    .push(value.index);
                value
            })
            .collect();
        self.stops = stops.into();
        self.stop_lookup = stop_lookup;
        self.name_to_stops = into_indexes(name_to_stops);
        debug!("Loading stops took {:?}", now.elapsed());
    }

    fn load_routes(&mut self, routes: Vec<GtfsRoute>) {
        debug!("Loading routes...");
        let now = Instant::now();
        let mut route_lookup: IdToIndex = HashMap::new();
        let routes: Vec<Route> = routes
            .into_iter()
            .enumerate()
            .map(|(i, route)| {
                let mut value: Route = route.into();
                value.index = i as u32;
                route_lookup.entry(value.id.clone()).or_insert(value.index);
                value
            })
            .collect();
        self.routes = routes.into();
        self.route_lookup = route_lookup;
        debug!("Loading routes took {:?}", now.elapsed());
    }

    fn load_trips(&mut self, trips: Vec<GtfsTrip>) {
        debug!("Loading trips...");
        let now = Instant::now();
        let mut trip_lookup: IdToIndex = HashMap::new();
        let mut route_to_trips: HashMap<Arc<str>, Vec<u32>> = HashMap::new();
        let trips: Vec<Trip> = trips
            .into_iter()
            .enumerate()
            .map(|(i, trip)| {
                let mut value: Trip = trip.into();
                value.index = i as u32;
                trip_lookup.entry(value.id.clone()).or_insert(value.index);
                // Indexed by the raw route id, the route itself may be missing
                route_to_trips
                    .entry(value.route_id.clone())
                    .or_default()
                    .push(value.index);
                value
            })
            .collect();
        self.trips = trips.into();
        self.trip_lookup = trip_lookup;
        self.route_to_trips = into_indexes(route_to_trips);
        debug!("Loading trips took {:?}", now.elapsed());
    }

    fn load_stop_times(&mut self, stop_times: Vec<GtfsStopTime>) {
        debug!("Loading stop times...");
        let now = Instant::now();
        let mut trip_to_stop_times: HashMap<Arc<str>, Vec<u32>> = HashMap::new();
        let mut stop_to_stop_times: HashMap<Arc<str>, Vec<u32>> = HashMap::new();
        let stop_times: Vec<StopTime> = stop_times
            .into_iter()
            .enumerate()
            .map(|(i, stop_time)| {
                let trip_id = self.shared_trip_id(&stop_time.trip_id);
                let stop_id = self.shared_stop_id(&stop_time.stop_id);
                let value = StopTime {
                    index: i as u32,
                    trip_id,
                    stop_id,
                    sequence: coerce::to_u32(&stop_time.stop_sequence),
                    arrival_time: Time::from_hms(&stop_time.arrival_time),
                    departure_time: Time::from_hms(&stop_time.departure_time),
                };
                trip_to_stop_times
                    .entry(value.trip_id.clone())
                    .or_default()
                    .push(value.index);
                stop_to_stop_times
                    .entry(value.stop_id.clone())
                    .or_default()
                    .push(value.index);
                value
            })
            .collect();
        self.stop_times = stop_times.into();
        self.trip_to_stop_times = into_indexes(trip_to_stop_times);
        self.stop_to_stop_times = into_indexes(stop_to_stop_times);
        debug!("Loading stop times took {:?}", now.elapsed());
    }

    fn load_shapes(&mut self, shapes: Vec<GtfsShape>) {
        debug!("Loading shapes...");
        let now = Instant::now();
        let mut owners: HashMap<String, Arc<str>> = HashMap::new();
        let shapes: Vec<ShapePoint> = shapes
            .into_iter()
            .map(|shape| {
                let shape_id = owners
                    .entry(shape.shape_id.clone())
                    .or_insert_with(|| shape.shape_id.as_str().into())
                    .clone();
                ShapePoint {
                    shape_id,
                    coordinate: Coordinate::new(
                        coerce::to_f64(&shape.shape_pt_lat),
                        coerce::to_f64(&shape.shape_pt_lon),
                    ),
                    sequence: coerce::to_u32(&shape.shape_pt_sequence),
                }
            })
            .collect();

        let mut grouped: HashMap<Arc<str>, Vec<&ShapePoint>> = HashMap::new();
        shapes.iter().for_each(|point| {
            grouped
                .entry(point.shape_id.clone())
                .or_default()
                .push(point);
        });
        // Stable sort, points sharing a sequence keep file order
        let shape_lookup: HashMap<Arc<str>, Box<[Coordinate]>> = grouped
            .into_par_iter()
            .map(|(shape_id, mut points)| {
                points.sort_by_key(|point| point.sequence);
                let points: Box<[Coordinate]> =
                    points.into_iter().map(|point| point.coordinate).collect();
                (shape_id, points)
            })
            .collect();

        self.shape_lookup = shape_lookup;
        self.shapes = shapes.into();
        debug!("Loading shapes took {:?}", now.elapsed());
    }

    /// Reuses the trip's id allocation when the trip is known.
    fn shared_trip_id(&self, id: &str) -> Arc<str> {
        self.trip_by_id(id)
            .map(|trip| trip.id.clone())
            .unwrap_or_else(|| id.into())
    }

    fn shared_stop_id(&self, id: &str) -> Arc<str> {
        self.stop_by_id(id)
            .map(|stop| stop.id.clone())
            .unwrap_or_else(|| id.into())
    }
}

fn into_indexes(map: HashMap<Arc<str>, Vec<u32>>) -> IdToIndexes {
    map.into_iter()
        .map(|(key, value)| (key, value.into()))
        .collect()
}

impl From<GtfsAgency> for Agency {
    fn from(value: GtfsAgency) -> Self {
        Self {
            id: coerce::non_empty(value.agency_id).map(Into::into),
            name: value.agency_name.into(),
            url: coerce::non_empty(value.agency_url).map(Into::into),
            timezone: coerce::non_empty(value.agency_timezone).map(Into::into),
        }
    }
}

impl From<GtfsRoute> for Route {
    fn from(value: GtfsRoute) -> Self {
        Self {
            index: 0,
            id: value.route_id.into(),
            short_name: value.route_short_name.unwrap_or_default().into(),
            long_name: value.route_long_name.unwrap_or_default().into(),
            color: coerce::non_empty(value.route_color).map(Into::into),
            text_color: coerce::non_empty(value.route_text_color).map(Into::into),
        }
    }
}

impl From<GtfsStop> for Stop {
    fn from(value: GtfsStop) -> Self {
        Self {
            index: 0,
            normalized_name: value.stop_name.to_lowercase().into(),
            name: value.stop_name.into(),
            id: value.stop_id.into(),
            coordinate: Coordinate::new(
                coerce::to_f64(&value.stop_lat),
                coerce::to_f64(&value.stop_lon),
            ),
        }
    }
}

impl From<GtfsTrip> for Trip {
    fn from(value: GtfsTrip) -> Self {
        Self {
            index: 0,
            id: value.trip_id.into(),
            route_id: value.route_id.into(),
            service_id: value.service_id.into(),
            headsign: coerce::non_empty(value.trip_headsign).map(Into::into),
            shape_id: coerce::non_empty(value.shape_id).map(Into::into),
        }
    }
}

impl From<GtfsCalendar> for Calendar {
    fn from(value: GtfsCalendar) -> Self {
        let flag = |cell: &str| coerce::to_i64(cell) == 1;
        Self {
            days: [
                flag(&value.monday),
                flag(&value.tuesday),
                flag(&value.wednesday),
                flag(&value.thursday),
                flag(&value.friday),
                flag(&value.saturday),
                flag(&value.sunday),
            ],
            service_id: value.service_id.into(),
            start_date: value.start_date.trim().into(),
            end_date: value.end_date.trim().into(),
        }
    }
}
