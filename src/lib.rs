//! Agri Advisory - weather-driven irrigation recommendations
//!
//! Maps a city or state name to a current weather observation (via
//! OpenWeatherMap, with a synthetic fallback when the provider is
//! unavailable) and scores the irrigation need for a given crop.

use std::sync::Arc;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;
use external::weather::WeatherClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: WeatherClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let weather = WeatherClient::new(
            config.weather.api_key.clone(),
            config.weather.api_endpoint.clone(),
        );
        Self {
            config: Arc::new(config),
            weather,
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::router()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
