pub mod gtfs;
pub mod repository;
pub mod shared;

pub mod prelude {
    pub use crate::gtfs::{
        Config, DirectorySource, FeedLoader, GtfsData, MemorySource, TableSource, ZipSource,
    };
    pub use crate::repository::{
        Agency, Calendar, Departure, Departures, HeadsignCorrections, Repository, Route,
        RouteShape, ShapePoint, Stop, StopTime, Trip,
    };
    pub use crate::shared::{Coordinate, LinePalette, Time};
}
