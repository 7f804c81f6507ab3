//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::messages::EMPTY_INPUT_MSG;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search actions =====
        Action::QueryChange(text) => {
            state.query = text;
            DispatchResult::changed()
        }

        Action::QuerySubmit(text) => {
            // Submit is disabled while a lookup is outstanding; this is also
            // what bounds in-flight requests to one.
            if state.lookup.is_loading() {
                return DispatchResult::unchanged();
            }

            let query = text.trim().to_string();
            if query.is_empty() {
                state.lookup = DataResource::Failed(EMPTY_INPUT_MSG.to_string());
                return DispatchResult::changed();
            }

            state.lookup = DataResource::Loading;
            state.tick_count = 0;
            DispatchResult::changed_with(Effect::FetchWeather { query })
        }

        // ===== Weather actions =====
        Action::WeatherDidLoad(report) => {
            state.lookup = DataResource::Loaded(report);
            DispatchResult::changed()
        }

        Action::WeatherDidError(message) => {
            state.lookup = DataResource::Failed(message);
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiToggleUnits => {
            state.unit = state.unit.toggle();
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.lookup.is_loading() {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}
