use halte::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StopDto {
    pub id: String,
    pub name: String,
    pub coordinate: Coordinate,
    pub lines: Vec<String>,
}

impl StopDto {
    pub fn from(stop: &Stop, repo: &Repository) -> Self {
        let lines = repo
            .lines_by_stop_id(&stop.id)
            .into_iter()
            .map(str::to_string)
            .collect();
        Self {
            id: stop.id.to_string(),
            name: stop.name.to_string(),
            coordinate: stop.coordinate,
            lines,
        }
    }
}
