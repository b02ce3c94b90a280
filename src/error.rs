//! Error handling for the Agri Advisory API
//!
//! Every failure path yields a well-formed JSON body. Provider failures
//! never reach this layer (the weather adapter recovers them internally);
//! the only client-visible error is an unmatched location.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::locations;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid location: {0}")]
    UnknownLocation(String),
}

/// Body returned for an unmatched location, including guidance on what
/// the service does accept.
#[derive(Serialize)]
pub struct InvalidLocationResponse {
    pub error: String,
    pub available_cities: Vec<&'static str>,
    pub available_states: Vec<&'static str>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::UnknownLocation(location) => {
                // User input error, not a system fault
                tracing::debug!(%location, "rejected unknown location");
                (
                    StatusCode::NOT_FOUND,
                    Json(InvalidLocationResponse {
                        error: "Invalid location".to_string(),
                        available_cities: locations::city_names(),
                        available_states: locations::state_names(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
