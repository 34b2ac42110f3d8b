use halte::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ShapeDto {
    pub id: String,
    pub color: String,
    pub points: Vec<Coordinate>,
}

impl From<&RouteShape<'_>> for ShapeDto {
    fn from(shape: &RouteShape<'_>) -> Self {
        Self {
            id: shape.shape_id.to_string(),
            color: shape.css_color(),
            points: shape.points.to_vec(),
        }
    }
}
