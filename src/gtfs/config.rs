use crate::gtfs::TableKind;

/// Logical paths of the seven tables, relative to the feed source.
#[derive(Debug, Clone)]
pub struct Config {
    pub agency_path: String,
    pub routes_path: String,
    pub stops_path: String,
    pub trips_path: String,
    pub stop_times_path: String,
    pub calendar_path: String,
    pub shapes_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agency_path: "agency.txt".into(),
            routes_path: "routes.txt".into(),
            stops_path: "stops.txt".into(),
            trips_path: "trips.txt".into(),
            stop_times_path: "stop_times.txt".into(),
            calendar_path: "calendar.txt".into(),
            shapes_path: "shapes.txt".into(),
        }
    }
}

impl Config {
    pub fn path(&self, table: TableKind) -> &str {
        match table {
            TableKind::Agency => &self.agency_path,
            TableKind::Routes => &self.routes_path,
            TableKind::Stops => &self.stops_path,
            TableKind::Trips => &self.trips_path,
            TableKind::StopTimes => &self.stop_times_path,
            TableKind::Calendar => &self.calendar_path,
            TableKind::Shapes => &self.shapes_path,
        }
    }
}
