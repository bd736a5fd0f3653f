//! Weather API client

use serde_json::Value;

use crate::config::WeatherConfig;
use crate::state::WeatherResult;

/// Why a weather lookup failed. `Display` is the message shown to the user.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

/// HTTP client bound to one [`WeatherConfig`]
#[derive(Clone, Debug)]
pub struct WeatherClient {
    http: reqwest::Client,
    config: WeatherConfig,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig) -> Self {
        Self::with_http(config, reqwest::Client::new())
    }

    /// Use a preconfigured HTTP client (proxy settings, timeouts, ...)
    pub fn with_http(config: WeatherConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    /// Fetch current conditions and the forecast for `location`
    pub async fn fetch_weather(&self, location: &str) -> Result<WeatherResult, FetchError> {
        let url = self.config.request_url(location);
        let mut request = self.http.get(&url);
        if let Some(key) = &self.config.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request.send().await?;
        let status = response.status();
        log::info!("weather lookup for {location:?} returned {status}");

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(FetchError::Http {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &body),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Message for a non-success response: the body's `detail` field when it
/// carries one, a generic status line otherwise.
pub fn error_message(status: u16, body: &[u8]) -> String {
    let fallback = || format!("Request failed with status: {status}");

    let data: Value = match serde_json::from_slice(body) {
        Ok(data) => data,
        Err(e) => {
            log::debug!("could not parse error body: {e}");
            return fallback();
        }
    };

    match data.get("detail") {
        Some(Value::String(detail)) => detail.clone(),
        Some(detail) if is_truthy(detail) => detail.to_string(),
        _ => fallback(),
    }
}

/// Null, false, zero and the empty string count as "no detail".
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
