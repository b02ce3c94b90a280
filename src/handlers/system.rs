//! Service description and health handlers

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::services::locations;
use crate::AppState;

#[derive(Serialize)]
pub struct HomeResponse {
    pub message: String,
    pub weather_endpoint: String,
    pub cities: Vec<&'static str>,
    pub states: Vec<&'static str>,
}

/// `GET /` - service description with endpoint hint and coverage lists
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Precision Agriculture API".to_string(),
        weather_endpoint: "/weather/<city_or_state>?crop=rice".to_string(),
        cities: locations::city_names(),
        states: locations::state_names(),
    })
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub api_key_configured: bool,
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        api_key_configured: state.weather.api_key_configured(),
    })
}
