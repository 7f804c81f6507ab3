//! Actions - every user and async event that can reach the reducer

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherReport;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Search category =====
    /// Location input text changed
    QueryChange(String),

    /// Submit the current input (the reducer trims and validates it)
    QuerySubmit(String),

    // ===== Weather category =====
    /// Result: lookup succeeded
    WeatherDidLoad(WeatherReport),

    /// Result: lookup failed (carries the user-facing message)
    WeatherDidError(String),

    // ===== UI category =====
    /// Toggle between Celsius and Fahrenheit
    UiToggleUnits,

    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Periodic tick for the Loading label animation
    Tick,

    /// Exit the application
    Quit,
}
