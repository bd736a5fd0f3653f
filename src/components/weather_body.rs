use artbox::{Alignment as ArtAlignment, Renderer, integrations::ratatui::ArtBox};
use chrono::NaiveDate;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use tui_dispatch::DataResource;

use super::forecast_panel::FORECAST_PANEL_HEIGHT;
use super::location_header::{FONT_HEIGHTS, font_stack, theme_fill};
use super::{
    Component, ERROR_ICON, ForecastPanel, ForecastPanelProps, LocationHeader, LocationHeaderProps,
};
use crate::action::Action;
use crate::forecast::{self, format_celsius, round_half_up};
use crate::sprites::{self, SpriteSize, derive_icon};
use crate::state::{AppState, WeatherResult};
use crate::theme::Theme;

pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
    /// Date used for the "Today" label
    pub today: NaiveDate,
}

/// Fixed rows: blank + condition + blank + detail values + detail labels.
const LAYOUT_FIXED: u16 = 5;

struct LayoutSizing {
    sprite: Option<SpriteSize>,
    sprite_h: u16,
    header_cap: u16,
    temp_cap: u16,
}

/// Try to fit the largest sprite by progressively shrinking text caps.
/// Only falls to emoji when no sprite fits even with plain text.
fn compute_layout(area_height: u16, forecast_h: u16) -> LayoutSizing {
    for &font_h in &FONT_HEIGHTS {
        let budget = area_height.saturating_sub(font_h * 2 + LAYOUT_FIXED + forecast_h);
        if let Some(size) = SpriteSize::for_height(budget) {
            return LayoutSizing {
                sprite: Some(size),
                sprite_h: size.height(),
                header_cap: font_h,
                temp_cap: font_h,
            };
        }
    }
    LayoutSizing {
        sprite: None,
        sprite_h: 1,
        header_cap: 1,
        temp_cap: 1,
    }
}

// ============================================================================
// Component
// ============================================================================

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let theme = props.state.theme();
        match WeatherView::from_state(props.state) {
            WeatherView::Error(error) => render_error(frame, area, error),
            WeatherView::Ready(weather) => render_ready(frame, area, weather, theme, props.today),
            WeatherView::Loading => render_loading(frame, area, props.state, theme),
            WeatherView::Idle => render_welcome(frame, area, theme),
        }
    }
}

fn render_ready(
    frame: &mut Frame,
    area: Rect,
    weather: &WeatherResult,
    theme: Theme,
    today: NaiveDate,
) {
    let rows = forecast::forecast_rows(weather, today).filter(|rows| !rows.is_empty());
    let forecast_h = if rows.is_some() {
        FORECAST_PANEL_HEIGHT
    } else {
        0
    };
    let sizing = compute_layout(area.height, forecast_h + 1);

    let chunks = Layout::vertical([
        Constraint::Max(sizing.header_cap), // City
        Constraint::Length(1),
        Constraint::Length(sizing.sprite_h), // Icon
        Constraint::Length(1),
        Constraint::Max(sizing.temp_cap), // Temperature
        Constraint::Length(1),            // Condition
        Constraint::Length(1),
        Constraint::Length(2), // Details
        Constraint::Length(1),
        Constraint::Length(forecast_h),
    ])
    .flex(Flex::Center)
    .split(area);

    let current = &weather.current;
    let condition = current.condition.as_deref();
    let text = Style::default().fg(theme.text_color());
    let muted = Style::default().fg(theme.muted_color());

    let mut header = LocationHeader;
    header.render(
        frame,
        chunks[0],
        LocationHeaderProps {
            location: &weather.location,
            theme,
        },
    );

    // Sprite or emoji
    let icon = derive_icon(condition);
    match sizing.sprite {
        Some(size) => {
            let art = sprites::get_sprite(icon, size);
            frame.render_widget(Paragraph::new(art).alignment(Alignment::Center), chunks[2]);
        }
        None => {
            let emoji = Line::from(icon.emoji()).centered();
            frame.render_widget(Paragraph::new(emoji), chunks[2]);
        }
    }

    render_temperature(frame, chunks[4], current.temperature, theme);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(condition.unwrap_or_default(), text)).centered()),
        chunks[5],
    );

    render_details(frame, chunks[7], weather, text, muted);

    if let Some(rows) = rows {
        let width = area.width.min(72);
        let panel_area = Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..chunks[9]
        };
        let mut panel = ForecastPanel;
        panel.render(
            frame,
            panel_area,
            ForecastPanelProps { rows: &rows, theme },
        );
    }
}

/// Unit drawn beside the FIGlet digits; the art fonts have no `°` glyph.
const TEMP_UNIT: &str = "°C";

/// Large temperature: FIGlet digits with a plain `°C` at their top right.
/// Falls back to a single plain line when no art font fits.
fn render_temperature(frame: &mut Frame, area: Rect, celsius: f64, theme: Theme) {
    let digits = round_half_up(celsius).to_string();
    let unit_w = TEMP_UNIT.chars().count() as u16;
    let renderer = Renderer::new(font_stack())
        .with_alignment(ArtAlignment::Center)
        .with_fill(theme_fill(theme, 0.0));

    let mut scratch = String::new();
    let fitted = renderer.render_into(
        &digits,
        area.width.saturating_sub(unit_w),
        area.height,
        &mut scratch,
    );

    match fitted {
        Ok(metrics) => {
            let total = metrics.width + unit_w;
            let x = area.x + area.width.saturating_sub(total) / 2;
            let art_area = Rect {
                x,
                width: metrics.width,
                ..area
            };
            let unit_area = Rect {
                x: x + metrics.width,
                y: area.y + area.height.saturating_sub(metrics.height) / 2,
                width: unit_w,
                height: 1,
            };
            frame.render_widget(ArtBox::new(&renderer, &digits), art_area);
            frame.render_widget(
                Paragraph::new(TEMP_UNIT).fg(theme.text_color()).bold(),
                unit_area,
            );
        }
        Err(_) => {
            let line = Line::from(format_celsius(celsius)).fg(theme.text_color()).bold();
            frame.render_widget(Paragraph::new(line.centered()), area);
        }
    }
}

/// Feels like / humidity / wind, value above label
fn render_details(frame: &mut Frame, area: Rect, weather: &WeatherResult, text: Style, muted: Style) {
    let current = &weather.current;
    let details = [
        (format_celsius(current.feels_like), "Feels like"),
        (format!("{}%", current.humidity), "Humidity"),
        (format!("{} km/h", current.wind_speed), "Wind"),
    ];

    let columns = Layout::horizontal([Constraint::Fill(1); 3])
        .flex(Flex::Center)
        .split(area);
    for ((value, label), column) in details.into_iter().zip(columns.iter()) {
        let lines = vec![
            Line::from(Span::styled(value, text.bold())).centered(),
            Line::from(Span::styled(label, muted)).centered(),
        ];
        frame.render_widget(Paragraph::new(lines), *column);
    }
}

fn render_loading(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(state.spinner_frame()).fg(theme.text_color()).centered()),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                "Fetching forecast...",
                Style::default().fg(theme.text_color()),
            ))
            .centered(),
        ),
        chunks[2],
    );
}

fn render_welcome(frame: &mut Frame, area: Rect, theme: Theme) {
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);

    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                "Welcome to Weatherly",
                Style::default().fg(theme.text_color()).bold(),
            ))
            .centered(),
        ),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                "Enter a city to get the forecast.",
                Style::default().fg(theme.muted_color()),
            ))
            .centered(),
        ),
        chunks[2],
    );
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // icon
        Constraint::Length(1), // "Request Failed"
        Constraint::Length(1), // message
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(ERROR_ICON).centered()),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                "Request Failed",
                Style::default().fg(Color::Rgb(254, 202, 202)).bold(),
            )])
            .centered(),
        ),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                error.to_string(),
                Style::default().fg(Color::Rgb(252, 165, 165)),
            )])
            .centered(),
        ),
        chunks[2],
    );
}

// ============================================================================
// Helpers
// ============================================================================

enum WeatherView<'a> {
    Error(&'a str),
    Ready(&'a WeatherResult),
    Loading,
    Idle,
}

impl<'a> WeatherView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        match &state.weather {
            DataResource::Failed(error) => WeatherView::Error(error),
            DataResource::Loaded(weather) => WeatherView::Ready(weather),
            DataResource::Loading => WeatherView::Loading,
            DataResource::Empty => WeatherView::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_layout_prefers_large_sprite() {
        let sizing = compute_layout(40, FORECAST_PANEL_HEIGHT);
        assert_eq!(sizing.sprite, Some(SpriteSize::Large));
        assert_eq!(sizing.header_cap, 6);
    }

    #[test]
    fn test_compute_layout_shrinks_text_first() {
        // 6*2 + 5 + 7 = 24 leaves nothing for a sprite; miniwi leaves 4
        let sizing = compute_layout(24, FORECAST_PANEL_HEIGHT);
        assert_eq!(sizing.sprite, Some(SpriteSize::Small));
        assert_eq!(sizing.header_cap, 4);
    }

    #[test]
    fn test_compute_layout_emoji_when_cramped() {
        let sizing = compute_layout(8, FORECAST_PANEL_HEIGHT);
        assert_eq!(sizing.sprite, None);
        assert_eq!(sizing.sprite_h, 1);
    }
}
