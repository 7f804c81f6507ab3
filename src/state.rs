//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

/// Current conditions for one looked-up location, as reported by the provider
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReport {
    pub temperature_c: f64,
    pub condition: String,
    pub location: String,
}

/// Temperature unit preference
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    pub fn toggle(&self) -> Self {
        match self {
            TempUnit::Celsius => TempUnit::Fahrenheit,
            TempUnit::Fahrenheit => TempUnit::Celsius,
        }
    }

    /// Unit letter as it appears after the degree sign
    pub fn symbol(&self) -> &'static str {
        match self {
            TempUnit::Celsius => "C",
            TempUnit::Fahrenheit => "F",
        }
    }

    /// Map a Celsius reading into this unit's scale
    pub fn convert(&self, celsius: f64) -> f64 {
        match self {
            TempUnit::Celsius => celsius,
            TempUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        }
    }
}

/// Animation timing for the Loading label dots.
pub const LOADING_ANIM_TICK_MS: u64 = 250;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Free-form location text in the search input
    #[debug(section = "Search", label = "Query")]
    pub query: String,

    /// Lookup lifecycle: Empty → Loading → Loaded/Failed
    #[debug(section = "Weather", label = "Lookup", debug_fmt)]
    pub lookup: DataResource<WeatherReport>,

    /// Temperature unit preference
    #[debug(section = "Weather", label = "Unit", debug_fmt)]
    pub unit: TempUnit,

    /// Animation frame counter (for the Loading label)
    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    /// Create state with the given initial input text
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            lookup: DataResource::Empty,
            unit: TempUnit::default(),
            tick_count: 0,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new("")
    }
}
