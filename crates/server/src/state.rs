use axum::http::StatusCode;
use halte::prelude::*;
use std::sync::Arc;
use tracing::error;

pub struct AppState {
    pub loader: FeedLoader,
    pub palette: LinePalette,
    pub corrections: HeadsignCorrections,
}

impl AppState {
    pub fn new(loader: FeedLoader) -> Self {
        Self {
            loader,
            palette: LinePalette::default(),
            corrections: HeadsignCorrections::default(),
        }
    }

    /// The loaded feed. Joins the running load if there is one.
    pub async fn repository(&self) -> Result<Arc<Repository>, StatusCode> {
        self.loader.get_data().await.map_err(|err| {
            error!("Failed to load feed: {err}");
            StatusCode::SERVICE_UNAVAILABLE
        })
    }
}
