//! Crop catalog handler

use axum::Json;
use serde::Serialize;

use crate::services::crops;

#[derive(Serialize)]
pub struct CropsResponse {
    pub crops: Vec<&'static str>,
}

/// `GET /crops` - the crop categories the advisory engine knows about
pub async fn list_crops() -> Json<CropsResponse> {
    Json(CropsResponse {
        crops: crops::categories(),
    })
}
