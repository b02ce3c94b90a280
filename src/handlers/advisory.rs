//! Irrigation advisory handler

use axum::{
    extract::{Path, Query, State},
    Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{IrrigationDecision, WeatherObservation};
use crate::services::{crops, irrigation, locations, weather};
use crate::AppState;

/// Query parameters for the advisory endpoint
#[derive(Debug, Deserialize)]
pub struct AdvisoryParams {
    pub crop: Option<String>,
}

/// Flat response merging the observation, the decision, and the echoed
/// request inputs.
#[derive(Debug, Serialize)]
pub struct AdvisoryResponse {
    #[serde(flatten)]
    pub observation: WeatherObservation,
    #[serde(flatten)]
    pub decision: IrrigationDecision,
    pub location: String,
    pub crop_type: String,
}

/// `GET /weather/:location?crop={name}`
pub async fn weather_advisory(
    State(state): State<AppState>,
    Path(location): Path<String>,
    Query(params): Query<AdvisoryParams>,
) -> AppResult<Json<AdvisoryResponse>> {
    let crop_raw = params.crop.unwrap_or_else(|| "rice".to_string());
    let crop_type = crops::normalize(&crop_raw);

    let query = locations::resolve(&location)
        .ok_or_else(|| AppError::UnknownLocation(location.clone()))?;

    let mut rng = StdRng::from_entropy();
    let observation = weather::observe(&state.weather, query, &mut rng).await;
    let decision = irrigation::decide(&observation, &crop_type, &mut rng);

    Ok(Json(AdvisoryResponse {
        observation,
        decision,
        location,
        crop_type,
    }))
}
