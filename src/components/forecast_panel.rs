use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::forecast::ForecastRow;
use crate::sprites::{self, SpriteSize};
use crate::theme::Theme;

/// Borders (2) + day label + small sprite + temperatures
pub const FORECAST_PANEL_HEIGHT: u16 = 2 + 1 + 3 + 1;

pub struct ForecastPanel;

pub struct ForecastPanelProps<'a> {
    pub rows: &'a [ForecastRow],
    pub theme: Theme,
}

impl Component<Action> for ForecastPanel {
    type Props<'a> = ForecastPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if props.rows.is_empty() || area.height < 3 {
            return;
        }

        let text = Style::default().fg(props.theme.text_color());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(props.theme.muted_color()))
            .title(Line::from(format!(" {}-Day Forecast ", props.rows.len())).bold())
            .style(text);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let columns = Layout::horizontal(vec![Constraint::Fill(1); props.rows.len()]).split(inner);
        for (row, column) in props.rows.iter().zip(columns.iter()) {
            let cells = Layout::vertical([
                Constraint::Length(1), // Day
                Constraint::Min(0),    // Icon
                Constraint::Length(1), // Temperatures
            ])
            .split(*column);

            frame.render_widget(
                Paragraph::new(Line::from(row.label.clone()).bold().centered()),
                cells[0],
            );

            let icon = if cells[1].height >= SpriteSize::Small.height() {
                sprites::get_sprite(row.icon, SpriteSize::Small)
            } else {
                Line::from(row.icon.emoji()).into()
            };
            frame.render_widget(Paragraph::new(icon).alignment(Alignment::Center), cells[1]);

            frame.render_widget(
                Paragraph::new(Line::from(row.temperatures.clone()).centered()),
                cells[2],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprites::WeatherIcon;
    use tui_dispatch::testing::*;

    fn rows() -> Vec<ForecastRow> {
        vec![
            ForecastRow {
                label: "Today".into(),
                icon: WeatherIcon::Rain,
                temperatures: "18° / 10°".into(),
            },
            ForecastRow {
                label: "Thu".into(),
                icon: WeatherIcon::Cloud,
                temperatures: "19° / 11°".into(),
            },
            ForecastRow {
                label: "Fri".into(),
                icon: WeatherIcon::Sun,
                temperatures: "22° / 12°".into(),
            },
        ]
    }

    #[test]
    fn test_render_columns() {
        let mut render = RenderHarness::new(60, FORECAST_PANEL_HEIGHT);
        let mut panel = ForecastPanel;
        let rows = rows();

        let output = render.render_to_string_plain(|frame| {
            let props = ForecastPanelProps {
                rows: &rows,
                theme: Theme::Rainy,
            };
            panel.render(frame, frame.area(), props);
        });

        assert!(output.contains("3-Day Forecast"));
        assert!(output.contains("Today"));
        assert!(output.contains("Thu"));
        assert!(output.contains("22° / 12°"));
    }

    #[test]
    fn test_render_nothing_without_rows() {
        let mut render = RenderHarness::new(40, FORECAST_PANEL_HEIGHT);
        let mut panel = ForecastPanel;

        let output = render.render_to_string_plain(|frame| {
            let props = ForecastPanelProps {
                rows: &[],
                theme: Theme::DayClear,
            };
            panel.render(frame, frame.area(), props);
        });

        assert!(!output.contains("Forecast"));
    }
}
