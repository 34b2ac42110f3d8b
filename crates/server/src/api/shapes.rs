use crate::{dto::ShapeDto, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::{collections::HashMap, sync::Arc};

pub async fn trip_shape(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let Some(trip_id) = params.get("id") else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let repository = state.repository().await?;
    Ok(Json(repository.shape_by_trip_id(trip_id)).into_response())
}

pub async fn route_shapes(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let Some(route_id) = params.get("id") else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let repository = state.repository().await?;
    let result: Vec<_> = repository
        .shapes_by_route_id(route_id)
        .iter()
        .map(ShapeDto::from)
        .collect();
    Ok(Json(result).into_response())
}
