//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search actions =====
        Action::SearchQueryChange(query) => {
            if state.query == query {
                return DispatchResult::unchanged();
            }
            state.query = query;
            DispatchResult::changed()
        }

        // ===== Weather actions =====
        Action::WeatherFetch(query) => {
            let query = query.trim().to_string();
            if query.is_empty() {
                return DispatchResult::unchanged();
            }
            // A newer request supersedes whatever is still in flight
            state.request_seq += 1;
            state.weather = DataResource::Loading;
            state.tick_count = 0;
            DispatchResult::changed_with(Effect::FetchWeather {
                seq: state.request_seq,
                query,
            })
        }

        Action::WeatherDidLoad(seq, result) => {
            if seq != state.request_seq {
                log::debug!("dropping stale weather response #{seq}");
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Loaded(result);
            log::info!("weather #{seq} loaded, theme {}", state.theme().key());
            DispatchResult::changed()
        }

        Action::WeatherDidError(seq, msg) => {
            if seq != state.request_seq {
                log::debug!("dropping stale weather error #{seq}: {msg}");
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Failed(msg);
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiRender => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.is_loading() {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}
