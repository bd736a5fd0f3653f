use chrono::{Local, NaiveDate};
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, SearchBar, SearchBarProps, WeatherBody, WeatherBodyProps};
use crate::action::Action;
use crate::state::AppState;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
    /// Date used for the "Today" forecast label
    pub today: NaiveDate,
}

impl<'a> WeatherDisplayProps<'a> {
    pub fn new(state: &'a AppState, is_focused: bool) -> Self {
        Self {
            state,
            is_focused,
            today: Local::now().date_naive(),
        }
    }
}

/// The whole screen: search bar, themed body, key hints
#[derive(Default)]
pub struct WeatherDisplay {
    search: SearchBar,
}

impl WeatherDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

fn search_props(state: &AppState, is_focused: bool) -> SearchBarProps<'_> {
    SearchBarProps {
        query: &state.query,
        is_loading: state.is_loading(),
        is_focused,
        spinner: state.spinner_frame(),
        on_query_change: Action::SearchQueryChange,
        on_query_submit: Action::WeatherFetch,
    }
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }
        self.search
            .handle_event(event, search_props(props.state, true))
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let theme = props.state.theme();
        theme.paint(frame.buffer_mut(), area);

        let chunks = Layout::vertical([
            Constraint::Length(3), // Search bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        self.search
            .render(frame, chunks[0], search_props(props.state, props.is_focused));

        let mut body = WeatherBody;
        body.render(
            frame,
            chunks[1],
            WeatherBodyProps {
                state: props.state,
                today: props.today,
            },
        );

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[2],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WeatherResult;
    use tui_dispatch::DataResource;
    use tui_dispatch::testing::*;

    #[test]
    fn test_handle_event_submit() {
        let mut component = WeatherDisplay::new();
        let state = AppState {
            query: "Paris".into(),
            ..Default::default()
        };

        let actions: Vec<_> = component
            .handle_event(
                &EventKind::Key(key("enter")),
                WeatherDisplayProps::new(&state, true),
            )
            .into_iter()
            .collect();
        actions.assert_count(1);
        actions.assert_first(Action::WeatherFetch("Paris".into()));
    }

    #[test]
    fn test_handle_event_unfocused_ignores() {
        let mut component = WeatherDisplay::new();
        let state = AppState::default();

        let actions: Vec<_> = component
            .handle_event(
                &EventKind::Key(key("esc")),
                WeatherDisplayProps::new(&state, false),
            )
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_render_loading() {
        let mut render = RenderHarness::new(60, 24);
        let mut component = WeatherDisplay::new();

        let state = AppState {
            weather: DataResource::Loading,
            ..Default::default()
        };

        let output = render.render_to_string_plain(|frame| {
            component.render(frame, frame.area(), WeatherDisplayProps::new(&state, true));
        });

        assert!(output.contains("Fetching forecast..."));
    }

    #[test]
    fn test_render_weather() {
        let mut render = RenderHarness::new(60, 30);
        let mut component = WeatherDisplay::new();

        let state = AppState {
            weather: DataResource::Loaded(WeatherResult {
                location: "Paris".into(),
                current: crate::state::CurrentConditions {
                    condition: Some("Clear".into()),
                    temperature: 22.5,
                    feels_like: 21.0,
                    humidity: 40.0,
                    wind_speed: 8.0,
                },
                forecast: None,
            }),
            ..Default::default()
        };

        let output = render.render_to_string_plain(|frame| {
            component.render(frame, frame.area(), WeatherDisplayProps::new(&state, true));
        });

        assert!(output.contains("Clear"));
        assert!(output.contains("Humidity"));
        assert!(!output.contains("Forecast"));
    }
}
