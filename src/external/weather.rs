//! Weather provider client
//!
//! Single-shot OpenWeatherMap lookups. The adapter swallows every failure
//! mode (transport error, timeout, non-200, malformed payload): it logs
//! for operator visibility and reports "no observation", leaving recovery
//! to the fallback generator.

use std::time::Duration;

use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::models::{WeatherObservation, WeatherSource};

/// Upper bound on one provider round trip
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Weather provider client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Error, Debug)]
enum ProviderError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(StatusCode),
}

/// OpenWeatherMap current-weather response, reduced to the fields we use
#[derive(Debug, Deserialize)]
struct OwmResponse {
    main: OwmMain,
    wind: OwmWind,
    weather: Vec<OwmWeather>,
    rain: Option<OwmRain>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: i64,
    pressure: i64,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwmRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Whether an API key is present at all
    pub fn api_key_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Fetch the current observation for a provider query string such as
    /// "Chennai,IN". Returns `None` on any provider failure.
    pub async fn current_observation(&self, query: &str) -> Option<WeatherObservation> {
        match self.try_fetch(query).await {
            Ok(observation) => Some(observation),
            Err(err) => {
                tracing::warn!(%query, error = %err, "weather provider unavailable");
                None
            }
        }
    }

    async fn try_fetch(&self, query: &str) -> Result<WeatherObservation, ProviderError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(ProviderError::Status(response.status()));
        }

        let data: OwmResponse = response.json().await?;
        Ok(Self::to_observation(data))
    }

    fn to_observation(data: OwmResponse) -> WeatherObservation {
        WeatherObservation {
            temperature: (data.main.temp * 10.0).round() / 10.0,
            humidity: data.main.humidity,
            rainfall_mm: data.rain.and_then(|r| r.one_hour).unwrap_or(0.0),
            wind_speed: data.wind.speed,
            pressure: data.main.pressure,
            weather_main: data
                .weather
                .first()
                .map(|w| w.main.clone())
                .unwrap_or_default(),
            timestamp: Utc::now(),
            source: WeatherSource::Provider,
        }
    }
}
