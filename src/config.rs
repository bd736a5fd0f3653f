//! Weather API configuration

use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://weather.indianapi.in/global/weather";

/// Forecast horizon requested from the API.
pub const FORECAST_DAYS: u8 = 3;

/// Where and how to reach the weather API.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherConfig {
    pub endpoint: String,
    /// Sent as the `x-api-key` header when present
    pub api_key: Option<String>,
    pub days: u8,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            days: FORECAST_DAYS,
        }
    }
}

impl WeatherConfig {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key,
            ..Default::default()
        }
    }

    pub fn request_url(&self, location: &str) -> String {
        format!(
            "{}?location={}&days={}",
            self.endpoint,
            urlencoding::encode(location),
            self.days
        )
    }
}

impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("days", &self.days)
            .finish()
    }
}
