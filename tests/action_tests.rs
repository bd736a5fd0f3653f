//! Action and state tests using TestHarness
//!
//! FRAMEWORK PATTERN: TestHarness
//! - Create harness with initial state
//! - Emit actions to simulate user/async events
//! - Drain and assert emitted actions

use tui_dispatch::testing::*;
use tui_dispatch::{EffectStore, NumericComponentId, assert_emitted, assert_not_emitted};
use weatherly::{
    action::Action,
    components::{Component, WeatherDisplay, WeatherDisplayProps},
    effect::Effect,
    reducer::reducer,
    state::{AppState, WeatherResult},
    theme::Theme,
};

fn paris() -> WeatherResult {
    serde_json::from_str(
        r#"{"location": "Paris",
            "current": {"condition": "Light rain", "temperature": 15.6,
                        "feels_like": 14.2, "humidity": 80, "wind_speed": 10}}"#,
    )
    .unwrap()
}

#[test]
fn test_reducer_weather_fetch() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    assert!(store.state().weather.is_empty());

    let result = store.dispatch(Action::WeatherFetch("Paris".into()));
    assert!(result.changed, "State should change");
    assert!(store.state().weather.is_loading());
    assert_eq!(result.effects.len(), 1);
    assert!(matches!(
        &result.effects[0],
        Effect::FetchWeather { seq: 1, query } if query == "Paris"
    ));
}

#[test]
fn test_reducer_weather_load() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    store.dispatch(Action::WeatherFetch("Paris".into()));
    store.dispatch(Action::WeatherDidLoad(1, paris()));

    assert!(store.state().weather.is_loaded());
    assert_eq!(store.state().weather.data(), Some(&paris()));
    assert_eq!(store.state().theme(), Theme::Rainy);
}

#[test]
fn test_empty_submit_is_noop() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    let before = store.state().clone();

    let result = store.dispatch(Action::WeatherFetch(String::new()));

    assert!(!result.changed);
    assert!(result.effects.is_empty());
    assert!(store.state().weather.is_empty());
    assert_eq!(store.state().request_seq, before.request_seq);
}

#[test]
fn test_component_keyboard_events() {
    let mut harness = TestHarness::<AppState, Action>::new(AppState {
        query: "Paris".into(),
        ..Default::default()
    });
    let mut component = WeatherDisplay::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("enter", |state, event| {
        component
            .handle_event(&event.kind, WeatherDisplayProps::new(state, true))
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_count(1);
    actions.assert_first(Action::WeatherFetch("Paris".into()));
}

#[test]
fn test_component_ignores_when_unfocused() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = WeatherDisplay::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("a enter esc", |state, event| {
        component
            .handle_event(&event.kind, WeatherDisplayProps::new(state, false))
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_empty();
}

#[test]
fn test_action_categories() {
    let did_load = Action::WeatherDidLoad(1, WeatherResult::default());
    let render = Action::UiRender;
    let tick = Action::Tick;

    assert_eq!(did_load.category(), Some("weather_did"));
    assert_eq!(render.category(), Some("ui"));
    assert_eq!(tick.category(), None);

    assert!(did_load.is_weather_did());
    assert!(render.is_ui());
}

#[test]
fn test_harness_emit_and_drain() {
    let mut harness = TestHarness::<(), Action>::new(());

    harness.emit(Action::WeatherFetch("Paris".into()));
    harness.emit(Action::SearchQueryChange("Oslo".into()));
    harness.emit(Action::WeatherDidError(1, "oops".into()));

    let actions = harness.drain_emitted();
    actions.assert_count(3);
}

#[test]
fn test_assert_emitted_macro() {
    let actions = vec![
        Action::WeatherFetch("Paris".into()),
        Action::WeatherDidLoad(1, WeatherResult::default()),
    ];

    assert_emitted!(actions, Action::WeatherFetch(_));
    assert_emitted!(actions, Action::WeatherDidLoad(_, _));
    assert_not_emitted!(actions, Action::Quit);
    assert_not_emitted!(actions, Action::WeatherDidError(_, _));
}
