//! Application state - single source of truth

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tui_dispatch::DataResource;

use crate::theme::{Theme, derive_theme};

/// Current conditions block of the weather API response
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CurrentConditions {
    pub condition: Option<String>,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub wind_speed: f64,
}

/// One hourly sample inside a forecast day
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HourlySample {
    #[serde(default)]
    pub condition: Option<String>,
}

/// One day of the forecast
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastDay {
    /// ISO date (`YYYY-MM-DD`)
    pub date: String,
    pub max_temp: f64,
    pub min_temp: f64,
    #[serde(default, deserialize_with = "lenient")]
    #[schemars(with = "Option<Vec<HourlySample>>")]
    pub hourly: Option<Vec<HourlySample>>,
}

/// Hour index used to pick a representative condition for a forecast day
pub const NOON_HOUR: usize = 12;

impl ForecastDay {
    /// Condition of the noon sample, if the API sent one
    pub fn noon_condition(&self) -> Option<&str> {
        self.hourly
            .as_ref()
            .and_then(|hours| hours.get(NOON_HOUR))
            .and_then(|sample| sample.condition.as_deref())
            .filter(|condition| !condition.is_empty())
    }
}

/// Successful weather API response
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherResult {
    pub location: String,
    pub current: CurrentConditions,
    /// `None` when the API omitted the forecast or sent something that is not
    /// a list of days.
    #[serde(default, deserialize_with = "lenient")]
    #[schemars(with = "Option<Vec<ForecastDay>>")]
    pub forecast: Option<Vec<ForecastDay>>,
}

/// Accept any JSON value, keeping it only if it parses as `T`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}

/// View lifecycle: Empty (idle) → Loading → Loaded (success) / Failed (error)
pub type ViewState = DataResource<WeatherResult>;

/// Spinner frame duration while a request is in flight.
pub const SPINNER_TICK_MS: u64 = 80;
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// City text as typed in the search bar
    #[debug(section = "Search", label = "Query")]
    pub query: String,

    /// Idle / Loading / Error / Success
    #[debug(section = "Weather", label = "View", debug_fmt)]
    pub weather: ViewState,

    /// Sequence number of the latest request; older responses are dropped
    #[debug(section = "Weather", label = "Request")]
    pub request_seq: u64,

    /// Spinner frame counter
    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            weather: DataResource::Empty,
            request_seq: 0,
            tick_count: 0,
        }
    }

    /// Background theme for the current view. Only a loaded result can
    /// select anything other than the default.
    pub fn theme(&self) -> Theme {
        match &self.weather {
            DataResource::Loaded(result) => derive_theme(result.current.condition.as_deref()),
            _ => Theme::default(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.weather.is_loading()
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.query.trim().is_empty()
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.tick_count as usize % SPINNER_FRAMES.len()]
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
