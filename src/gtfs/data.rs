use crate::gtfs::{
    GtfsAgency, GtfsCalendar, GtfsRoute, GtfsShape, GtfsStop, GtfsStopTime, GtfsTrip,
};

/// The seven tables a feed is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Agency,
    Routes,
    Stops,
    Trips,
    StopTimes,
    Calendar,
    Shapes,
}

impl TableKind {
    pub const ALL: [TableKind; 7] = [
        TableKind::Agency,
        TableKind::Routes,
        TableKind::Stops,
        TableKind::Trips,
        TableKind::StopTimes,
        TableKind::Calendar,
        TableKind::Shapes,
    ];

    /// An empty table of this kind, used when the source could not deliver it.
    pub fn empty(self) -> GtfsTable {
        match self {
            TableKind::Agency => GtfsTable::Agency(Vec::new()),
            TableKind::Routes => GtfsTable::Routes(Vec::new()),
            TableKind::Stops => GtfsTable::Stops(Vec::new()),
            TableKind::Trips => GtfsTable::Trips(Vec::new()),
            TableKind::StopTimes => GtfsTable::StopTimes(Vec::new()),
            TableKind::Calendar => GtfsTable::Calendar(Vec::new()),
            TableKind::Shapes => GtfsTable::Shapes(Vec::new()),
        }
    }
}

/// Parsed, untyped feed rows in file order.
#[derive(Default, Debug, Clone)]
pub struct GtfsData {
    pub agency: Vec<GtfsAgency>,
    pub routes: Vec<GtfsRoute>,
    pub stops: Vec<GtfsStop>,
    pub trips: Vec<GtfsTrip>,
    pub stop_times: Vec<GtfsStopTime>,
    pub calendar: Vec<GtfsCalendar>,
    pub shapes: Vec<GtfsShape>,
}

impl From<Vec<GtfsTable>> for GtfsData {
    fn from(value: Vec<GtfsTable>) -> Self {
        let mut data = Self::default();
        value.into_iter().for_each(|table| match table {
            GtfsTable::Agency(agency) => data.agency = agency,
            GtfsTable::Routes(routes) => data.routes = routes,
            GtfsTable::Stops(stops) => data.stops = stops,
            GtfsTable::Trips(trips) => data.trips = trips,
            GtfsTable::StopTimes(stop_times) => data.stop_times = stop_times,
            GtfsTable::Calendar(calendar) => data.calendar = calendar,
            GtfsTable::Shapes(shapes) => data.shapes = shapes,
        });
        data
    }
}

#[derive(Debug)]
pub enum GtfsTable {
    Agency(Vec<GtfsAgency>),
    Routes(Vec<GtfsRoute>),
    Stops(Vec<GtfsStop>),
    Trips(Vec<GtfsTrip>),
    StopTimes(Vec<GtfsStopTime>),
    Calendar(Vec<GtfsCalendar>),
    Shapes(Vec<GtfsShape>),
}

impl GtfsTable {
    pub fn len(&self) -> usize {
        match self {
            GtfsTable::Agency(rows) => rows.len(),
            GtfsTable::Routes(rows) => rows.len(),
            GtfsTable::Stops(rows) => rows.len(),
            GtfsTable::Trips(rows) => rows.len(),
            GtfsTable::StopTimes(rows) => rows.len(),
            GtfsTable::Calendar(rows) => rows.len(),
            GtfsTable::Shapes(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
