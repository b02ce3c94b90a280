//! Observation acquisition
//!
//! Fetches the current observation from the provider, or synthesizes a
//! plausible one when the provider is unavailable. The caller never sees
//! a failure.

use chrono::Utc;
use rand::Rng;

use crate::external::weather::WeatherClient;
use crate::models::{WeatherObservation, WeatherSource};

/// Fetch the current observation for a provider query string, falling
/// back to a synthetic observation when the provider yields nothing.
pub async fn observe<R: Rng + ?Sized>(
    client: &WeatherClient,
    query: &str,
    rng: &mut R,
) -> WeatherObservation {
    match client.current_observation(query).await {
        Some(observation) => observation,
        None => synthetic_observation(rng),
    }
}

/// Synthesize a plausible observation for the covered region
pub fn synthetic_observation<R: Rng + ?Sized>(rng: &mut R) -> WeatherObservation {
    WeatherObservation {
        temperature: round1(26.0 + rng.gen_range(-2.0..3.0)),
        humidity: rng.gen_range(55..=80),
        rainfall_mm: round1(rng.gen_range(0.0..3.5)),
        wind_speed: round1(rng.gen_range(5.0..15.0)),
        pressure: 1012,
        weather_main: "Clear".to_string(),
        timestamp: Utc::now(),
        source: WeatherSource::Fallback,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
