use crate::{
    dto::{RouteDto, StopDto},
    state::AppState,
};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

pub async fn stops(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let repository = state.repository().await?;
    let result: Vec<_> = repository
        .stops
        .iter()
        // Rows repeating an id are unreachable through lookups
        .filter(|stop| {
            repository
                .stop_by_id(&stop.id)
                .is_some_and(|first| first.index == stop.index)
        })
        .map(|stop| StopDto::from(stop, &repository))
        .collect();
    Ok(Json(result).into_response())
}

pub async fn routes(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let repository = state.repository().await?;
    let result: Vec<_> = repository
        .routes
        .iter()
        .map(|route| RouteDto::from(route, &state.palette))
        .collect();
    Ok(Json(result).into_response())
}
