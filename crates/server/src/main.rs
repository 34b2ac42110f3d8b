mod api;
mod dto;
mod source;
mod state;

use crate::{
    source::{BlockingSource, HttpSource},
    state::AppState,
};
use axum::routing::get;
use halte::prelude::*;
use std::{sync::Arc, time::Instant};
use tracing::{error, info};

const PORT: u32 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let args: Vec<_> = std::env::args().collect();
    if args.len() < 2 {
        error!("Missing gtfs feed: expected a url, a zip or a directory");
        std::process::exit(1);
    }
    let state = Arc::new(AppState::new(loader_for(&args[1])));

    let warm_up = state.clone();
    tokio::spawn(async move {
        info!("Loading data...");
        let now = Instant::now();
        match warm_up.loader.get_data().await {
            Ok(repository) => info!(
                "Loaded {} stops, {} trips and {} stop times in {:?}",
                repository.stops.len(),
                repository.trips.len(),
                repository.stop_times.len(),
                now.elapsed()
            ),
            Err(err) => error!("Failed to load feed: {err}"),
        }
    });

    let app = axum::Router::new()
        .route("/stops", get(api::stops))
        .route("/routes", get(api::routes))
        .route("/departures", get(api::departures))
        .route("/shapes/trip", get(api::trip_shape))
        .route("/shapes/route", get(api::route_shapes))
        .with_state(state);

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{PORT}")).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {PORT}: {err}");
            std::process::exit(1);
        }
    };
    info!("Listening to port {PORT}");
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}

fn loader_for(location: &str) -> FeedLoader {
    let config = Config::default();
    if location.starts_with("http://") || location.starts_with("https://") {
        info!("Reading feed from {location}");
        FeedLoader::from_source(HttpSource::new(location), config)
    } else if location.ends_with(".zip") {
        info!("Reading feed from archive {location}");
        FeedLoader::from_source(BlockingSource::new(ZipSource::new(location)), config)
    } else {
        info!("Reading feed from directory {location}");
        FeedLoader::from_source(BlockingSource::new(DirectorySource::new(location)), config)
    }
}
