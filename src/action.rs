//! Actions: user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherResult;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Search category =====
    /// Search input text changed
    SearchQueryChange(String),

    // ===== Weather category =====
    /// Intent: look up the weather for a city (triggers async task)
    WeatherFetch(String),

    /// Result: request `seq` returned a forecast
    WeatherDidLoad(u64, WeatherResult),

    /// Result: request `seq` failed with a user-facing message
    WeatherDidError(u64, String),

    // ===== UI category =====
    /// Force a re-render (for cursor movement, etc.)
    UiRender,

    // ===== Uncategorized (global) =====
    /// Periodic tick for the loading spinner
    Tick,

    /// Exit the application
    Quit,
}
