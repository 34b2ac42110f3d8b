use halte::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RouteDto {
    pub id: String,
    pub short_name: String,
    pub long_name: String,
    pub color: String,
    pub text_color: Option<String>,
}

impl RouteDto {
    pub fn from(route: &Route, palette: &LinePalette) -> Self {
        let color = palette.color_for(&route.short_name, route.color.as_deref());
        Self {
            id: route.id.to_string(),
            short_name: route.short_name.to_string(),
            long_name: route.long_name.to_string(),
            color: format!("#{color}"),
            text_color: route.text_color.as_ref().map(|color| format!("#{color}")),
        }
    }
}
