//! Condition-driven background themes

use artbox::Color as ArtColor;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Background gradient selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    DayClear,
    Cloudy,
    Rainy,
    Snowy,
    Hazy,
}

/// Keyword groups in priority order. First group with a hit wins.
const THEME_RULES: [(&[&str], Theme); 5] = [
    (&["rain", "drizzle"], Theme::Rainy),
    (&["cloud", "overcast"], Theme::Cloudy),
    (&["snow", "sleet"], Theme::Snowy),
    (&["clear", "sunny"], Theme::DayClear),
    (&["haze", "mist", "fog"], Theme::Hazy),
];

/// Pick a theme from a free-text condition such as "Light rain".
pub fn derive_theme(condition: Option<&str>) -> Theme {
    let Some(condition) = condition else {
        return Theme::DayClear;
    };
    let condition = condition.to_lowercase();
    THEME_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| condition.contains(k)))
        .map(|(_, theme)| *theme)
        .unwrap_or(Theme::DayClear)
}

impl Theme {
    pub fn key(self) -> &'static str {
        match self {
            Theme::DayClear => "day-clear",
            Theme::Cloudy => "cloudy",
            Theme::Rainy => "rainy",
            Theme::Snowy => "snowy",
            Theme::Hazy => "hazy",
        }
    }

    /// Gradient endpoints (top-left, bottom-right) as RGB
    pub fn gradient(self) -> ((u8, u8, u8), (u8, u8, u8)) {
        match self {
            Theme::DayClear => ((56, 189, 248), (37, 99, 235)),
            Theme::Cloudy => ((148, 163, 184), (75, 85, 99)),
            Theme::Rainy => ((71, 85, 105), (31, 41, 55)),
            Theme::Snowy => ((186, 230, 253), (147, 197, 253)),
            Theme::Hazy => ((156, 163, 175), (107, 114, 128)),
        }
    }

    /// Lighter pair used for large text drawn on top of the background
    pub fn text_gradient(self) -> (ArtColor, ArtColor) {
        match self {
            Theme::DayClear => (ArtColor::rgb(255, 240, 150), ArtColor::rgb(255, 255, 255)),
            Theme::Cloudy => (ArtColor::rgb(230, 235, 240), ArtColor::rgb(255, 255, 255)),
            Theme::Rainy => (ArtColor::rgb(150, 200, 255), ArtColor::rgb(220, 235, 255)),
            Theme::Snowy => (ArtColor::rgb(30, 64, 175), ArtColor::rgb(59, 130, 246)),
            Theme::Hazy => (ArtColor::rgb(240, 240, 240), ArtColor::rgb(255, 250, 235)),
        }
    }

    /// Foreground for regular text
    pub fn text_color(self) -> Color {
        match self {
            Theme::Snowy => Color::Rgb(15, 23, 42),
            _ => Color::White,
        }
    }

    /// Foreground for secondary text (labels, hints)
    pub fn muted_color(self) -> Color {
        match self {
            Theme::Snowy => Color::Rgb(51, 65, 85),
            _ => Color::Rgb(226, 232, 240),
        }
    }

    /// Paint the diagonal background gradient over `area`.
    pub fn paint(self, buf: &mut Buffer, area: Rect) {
        let (start, end) = self.gradient();
        let span = (area.width as u32 + area.height as u32).max(2) - 2;
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let step = (x - area.left()) as u32 + (y - area.top()) as u32;
                let t = if span == 0 {
                    0.0
                } else {
                    step as f32 / span as f32
                };
                let color = lerp(start, end, t);
                buf[(x, y)].set_style(Style::default().bg(color));
            }
        }
    }
}

fn lerp(start: (u8, u8, u8), end: (u8, u8, u8), t: f32) -> Color {
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color::Rgb(
        mix(start.0, end.0),
        mix(start.1, end.1),
        mix(start.2, end.2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_condition_is_day_clear() {
        assert_eq!(derive_theme(None), Theme::DayClear);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(derive_theme(Some("Light rain")), Theme::Rainy);
        assert_eq!(derive_theme(Some("Patchy light drizzle")), Theme::Rainy);
        assert_eq!(derive_theme(Some("Partly cloudy")), Theme::Cloudy);
        assert_eq!(derive_theme(Some("Overcast")), Theme::Cloudy);
        assert_eq!(derive_theme(Some("Heavy snow")), Theme::Snowy);
        assert_eq!(derive_theme(Some("Light sleet")), Theme::Snowy);
        assert_eq!(derive_theme(Some("Sunny")), Theme::DayClear);
        assert_eq!(derive_theme(Some("Clear")), Theme::DayClear);
        assert_eq!(derive_theme(Some("Haze")), Theme::Hazy);
        assert_eq!(derive_theme(Some("Mist")), Theme::Hazy);
        assert_eq!(derive_theme(Some("Freezing fog")), Theme::Hazy);
        assert_eq!(derive_theme(Some("Thundery outbreaks")), Theme::DayClear);
        assert_eq!(derive_theme(Some("")), Theme::DayClear);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(derive_theme(Some("HEAVY RAIN")), Theme::Rainy);
        assert_eq!(derive_theme(Some("mOsTlY CLOUDY")), Theme::Cloudy);
    }

    #[test]
    fn test_priority_order() {
        // rain beats cloud, cloud beats snow, snow beats clear, clear beats fog
        assert_eq!(derive_theme(Some("Cloudy with rain")), Theme::Rainy);
        assert_eq!(derive_theme(Some("Snow showers, overcast")), Theme::Cloudy);
        assert_eq!(derive_theme(Some("Sunny with sleet")), Theme::Snowy);
        assert_eq!(derive_theme(Some("Fog clearing")), Theme::DayClear);
    }

    #[test]
    fn test_keys_are_kebab_case() {
        assert_eq!(Theme::DayClear.key(), "day-clear");
        assert_eq!(
            serde_json::to_string(&Theme::DayClear).unwrap(),
            "\"day-clear\""
        );
        assert_eq!(serde_json::to_string(&Theme::Hazy).unwrap(), "\"hazy\"");
    }

    #[test]
    fn test_paint_fills_background() {
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        Theme::Rainy.paint(&mut buf, area);

        assert_eq!(buf[(0, 0)].bg, Color::Rgb(71, 85, 105));
        assert_eq!(buf[(9, 3)].bg, Color::Rgb(31, 41, 55));
    }
}
