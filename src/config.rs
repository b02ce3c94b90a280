//! Configuration management for the Agri Advisory API
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code (seeded from the legacy `PORT` and
//!    `OPENWEATHER_API_KEY` environment variables when present)
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGRI_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Default OpenWeatherMap key shipped by the upstream service. Operators
/// must override this in any real deployment.
const DEFAULT_API_KEY: &str = "c919f014a41d054f2c1182b7fa8c2025";

const DEFAULT_API_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather provider configuration
    pub weather: WeatherConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// Weather API key
    pub api_key: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let default_port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<i64>().ok())
            .unwrap_or(5000);
        let default_api_key =
            std::env::var("OPENWEATHER_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", default_port)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.api_endpoint", DEFAULT_API_ENDPOINT)?
            .set_default("weather.api_key", default_api_key)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRI_ prefix)
            .add_source(
                Environment::with_prefix("AGRI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".to_string(),
        }
    }
}
