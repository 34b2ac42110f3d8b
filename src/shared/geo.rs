use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A WGS84 position as found in `stops.txt` and `shapes.txt`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.latitude, self.longitude))
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(value: Coordinate) -> Self {
        (value.latitude, value.longitude)
    }
}

#[test]
fn tuple_conversion_keeps_lat_lon_order() {
    let coordinate = Coordinate::from((48.4542, -2.0476));
    assert_eq!(coordinate.latitude, 48.4542);
    assert_eq!(coordinate.longitude, -2.0476);
    let (lat, lon): (f64, f64) = coordinate.into();
    assert_eq!((lat, lon), (48.4542, -2.0476));
}

#[test]
fn display_is_lat_then_lon() {
    let coordinate = Coordinate::new(48.5, -2.25);
    assert_eq!(coordinate.to_string(), "48.5, -2.25");
}
