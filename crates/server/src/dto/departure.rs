use halte::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DepartureDto {
    pub route_id: String,
    pub line: String,
    pub line_name: String,
    pub color: String,
    pub headsign: String,
    pub arrival_time: String,
    pub departure_time: String,
    pub minutes_until: i32,
}

impl DepartureDto {
    pub fn from(departure: Departure, palette: &LinePalette) -> Self {
        let feed_color = Some(departure.route_color.as_str()).filter(|color| !color.is_empty());
        let color = format!(
            "#{}",
            palette.color_for(&departure.route_short_name, feed_color)
        );
        Self {
            route_id: departure.route_id,
            line: departure.route_short_name,
            line_name: departure.route_long_name,
            color,
            headsign: departure.headsign,
            arrival_time: departure.arrival_time,
            departure_time: departure.departure_time,
            minutes_until: departure.minutes_until,
        }
    }
}
