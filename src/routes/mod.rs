//! Route definitions for the Agri Advisory API

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create the route table
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route("/crops", get(handlers::list_crops))
        .route("/weather/:location", get(handlers::weather_advisory))
}
