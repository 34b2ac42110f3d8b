#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use halte::{
    gtfs::{self, Config, GtfsData, MemorySource, TableKind},
    repository::Repository,
};
use std::collections::HashMap;

pub const AGENCY: &str = "\
agency_id,agency_name,agency_url,agency_timezone
DINAMO,Dinamo,https://example.org,Europe/Paris
";

pub const ROUTES: &str = "\
route_id,agency_id,route_short_name,route_long_name,route_type,route_color,route_text_color
R1,DINAMO,1,Gare - Quévert,3,654897,FFFFFF
R2,DINAMO,2,Gare - Hôpital,3,,
";

pub const STOPS: &str = "\
stop_id,stop_name,stop_lat,stop_lon
S1,Centre,48.4551,-2.0502
S2,CENTRE,48.4553,-2.0505
S3,Gare,48.4601,-2.0402
S4,Mairie,48.4702,-2.0301
S5,Hôpital,48.4403,-2.0604
";

/// WEEK runs Monday to Friday, SUN on Sundays, both through 2025.
pub const CALENDAR: &str = "\
service_id,monday,tuesday,wednesday,thursday,friday,saturday,sunday,start_date,end_date
WEEK,1,1,1,1,1,0,0,20250101,20251231
SUN,0,0,0,0,0,0,1,20250101,20251231
";

const TRIPS_HEADER: &str = "route_id,service_id,trip_id,trip_headsign,direction_id,shape_id\n";
const STOP_TIMES_HEADER: &str = "trip_id,arrival_time,departure_time,stop_id,stop_sequence\n";
const SHAPES_HEADER: &str = "shape_id,shape_pt_lat,shape_pt_lon,shape_pt_sequence\n";

/// A small feed assembled from CSV text.
#[derive(Clone)]
pub struct Feed {
    tables: HashMap<TableKind, String>,
}

impl Feed {
    /// Agency, routes, stops and calendar filled in; trips, stop times and
    /// shapes header-only.
    pub fn new() -> Self {
        let mut tables = HashMap::new();
        tables.insert(TableKind::Agency, AGENCY.to_string());
        tables.insert(TableKind::Routes, ROUTES.to_string());
        tables.insert(TableKind::Stops, STOPS.to_string());
        tables.insert(TableKind::Calendar, CALENDAR.to_string());
        tables.insert(TableKind::Trips, TRIPS_HEADER.to_string());
        tables.insert(TableKind::StopTimes, STOP_TIMES_HEADER.to_string());
        tables.insert(TableKind::Shapes, SHAPES_HEADER.to_string());
        Self { tables }
    }

    pub fn with(mut self, table: TableKind, body: &str) -> Self {
        self.tables.insert(table, body.to_string());
        self
    }

    pub fn without(mut self, table: TableKind) -> Self {
        self.tables.remove(&table);
        self
    }

    pub fn trips(self, rows: &str) -> Self {
        self.with(TableKind::Trips, &format!("{TRIPS_HEADER}{rows}"))
    }

    pub fn stop_times(self, rows: &str) -> Self {
        self.with(TableKind::StopTimes, &format!("{STOP_TIMES_HEADER}{rows}"))
    }

    pub fn shapes(self, rows: &str) -> Self {
        self.with(TableKind::Shapes, &format!("{SHAPES_HEADER}{rows}"))
    }

    pub fn data(&self) -> GtfsData {
        let tables: Vec<_> = self
            .tables
            .iter()
            .map(|(kind, body)| gtfs::parse_table(*kind, body).unwrap())
            .collect();
        tables.into()
    }

    pub fn repository(&self) -> Repository {
        Repository::new().load_gtfs(self.data())
    }

    pub fn source(&self) -> MemorySource {
        let config = Config::default();
        self.tables
            .iter()
            .fold(MemorySource::new(), |source, (kind, body)| {
                source.with_table(config.path(*kind), body)
            })
    }
}

/// 2025-03-10 is a Monday.
pub fn monday_at(hour: u32, minute: u32) -> NaiveDateTime {
    at(2025, 3, 10, hour, minute)
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}
