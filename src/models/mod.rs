//! Domain models for the Agri Advisory API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a weather observation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherSource {
    Provider,
    Fallback,
}

/// A snapshot of weather conditions at request time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Temperature in °C, rounded to one decimal
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: i64,
    /// Rainfall over the last hour in millimeters (0 when the provider
    /// reports none)
    pub rainfall_mm: f64,
    pub wind_speed: f64,
    pub pressure: i64,
    /// Short condition label, e.g. "Clear" or "Rain"
    pub weather_main: String,
    pub timestamp: DateTime<Utc>,
    pub source: WeatherSource,
}

/// Watering priority tier for a crop category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterPriority {
    Low,
    Medium,
    High,
}

/// Irrigation reference values for one crop category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropThreshold {
    pub moisture_min: f64,
    pub temp_max: f64,
    pub humidity_min: f64,
    pub priority: WaterPriority,
}

/// Outcome of the irrigation scoring heuristic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrrigationDecision {
    pub irrigate: bool,
    /// Always in [75, 98]
    pub confidence_percent: u8,
    pub water_priority: WaterPriority,
    /// Always in [0, 100]; higher means greater irrigation need
    pub irrigation_score: u8,
    pub recommendation_text: String,
}
