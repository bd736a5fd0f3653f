use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;

pub const PLACEHOLDER: &str = "Search for a city...";

/// City input plus its submit control
pub struct SearchBar {
    input: TextInput,
}

pub struct SearchBarProps<'a> {
    pub query: &'a str,
    pub is_loading: bool,
    pub is_focused: bool,
    pub spinner: &'a str,
    // Action constructors
    pub on_query_change: fn(String) -> Action,
    pub on_query_submit: fn(String) -> Action,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
        }
    }
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Submit is disabled while a request is in flight or the input is blank.
fn submit_enabled(props: &SearchBarProps<'_>) -> bool {
    !props.is_loading && !props.query.trim().is_empty()
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Esc => return vec![Action::Quit],
            KeyCode::Enter => {
                if submit_enabled(&props) {
                    return vec![(props.on_query_submit)(props.query.trim().to_string())];
                }
                return Vec::new();
            }
            _ => {}
        }

        let input_props = TextInputProps {
            value: props.query,
            placeholder: PLACEHOLDER,
            is_focused: true,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::new(1, 0, 1, 0),
                    bg: None,
                    fg: None,
                },
                placeholder_style: None,
                cursor_style: None,
            },
            on_change: props.on_query_change,
            on_submit: props.on_query_submit,
            on_cursor_move: Some(|_| Action::UiRender),
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::horizontal([
            Constraint::Min(10),    // Input
            Constraint::Length(1),  // Gap
            Constraint::Length(12), // Submit
        ])
        .split(area);

        let input_props = TextInputProps {
            value: props.query,
            placeholder: PLACEHOLDER,
            is_focused: props.is_focused,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::all(1),
                    bg: Some(Color::Rgb(50, 50, 60)),
                    fg: None,
                },
                placeholder_style: None,
                cursor_style: None,
            },
            on_change: props.on_query_change,
            on_submit: props.on_query_submit,
            on_cursor_move: Some(|_| Action::UiRender),
        };
        self.input.render(frame, chunks[0], input_props);

        let enabled = submit_enabled(&props);
        let label = if props.is_loading {
            format!("[ {} ]", props.spinner)
        } else {
            "[ Search ]".to_string()
        };
        let style = if enabled {
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(70, 70, 90))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::DIM)
        };

        let button_area = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .split(chunks[2])[0];
        frame.render_widget(
            Paragraph::new(Line::from(label).centered()).style(style),
            button_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    fn props(query: &str, is_loading: bool) -> SearchBarProps<'_> {
        SearchBarProps {
            query,
            is_loading,
            is_focused: true,
            spinner: "⠋",
            on_query_change: Action::SearchQueryChange,
            on_query_submit: Action::WeatherFetch,
        }
    }

    #[test]
    fn test_enter_submits_trimmed_query() {
        let mut bar = SearchBar::new();
        let actions: Vec<_> = bar
            .handle_event(&EventKind::Key(key("enter")), props("  Paris ", false))
            .into_iter()
            .collect();
        actions.assert_count(1);
        actions.assert_first(Action::WeatherFetch("Paris".into()));
    }

    #[test]
    fn test_enter_disabled_when_empty() {
        let mut bar = SearchBar::new();
        let actions: Vec<_> = bar
            .handle_event(&EventKind::Key(key("enter")), props("   ", false))
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_enter_disabled_while_loading() {
        let mut bar = SearchBar::new();
        let actions: Vec<_> = bar
            .handle_event(&EventKind::Key(key("enter")), props("Paris", true))
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_esc_quits() {
        let mut bar = SearchBar::new();
        let actions: Vec<_> = bar
            .handle_event(&EventKind::Key(key("esc")), props("", false))
            .into_iter()
            .collect();
        actions.assert_first(Action::Quit);
    }

    #[test]
    fn test_typing_changes_query() {
        let mut bar = SearchBar::new();
        let actions: Vec<_> = bar
            .handle_event(&EventKind::Key(key("a")), props("", false))
            .into_iter()
            .collect();
        assert!(
            actions
                .iter()
                .any(|a| matches!(a, Action::SearchQueryChange(q) if q == "a")),
            "typing should update the query: {actions:?}"
        );
    }

    #[test]
    fn test_render_shows_placeholder_and_button() {
        let mut render = RenderHarness::new(60, 3);
        let mut bar = SearchBar::new();
        let output = render.render_to_string_plain(|frame| {
            bar.render(frame, frame.area(), props("", false));
        });
        assert!(output.contains("Search for a city"));
        assert!(output.contains("[ Search ]"));
    }
}
