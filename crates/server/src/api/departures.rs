use crate::{dto::DepartureDto, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use halte::repository::DEFAULT_LIMIT_PER_ROUTE;
use std::{collections::HashMap, sync::Arc};

pub async fn departures(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let Some(stop_id) = params.get("stop") else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let limit: usize = match params.get("limit") {
        Some(value) => match value.parse() {
            Ok(value) => value,
            Err(_) => return Err(StatusCode::BAD_REQUEST),
        },
        None => DEFAULT_LIMIT_PER_ROUTE,
    };

    let repository = state.repository().await?;
    let result: Vec<_> = repository
        .departures(stop_id)
        .limit_per_route(limit)
        .with_corrections(&state.corrections)
        .solve()
        .into_iter()
        .map(|departure| DepartureDto::from(departure, &state.palette))
        .collect();
    Ok(Json(result).into_response())
}
