//! Condition icons: selection plus multi-layer ASCII sprites
//!
//! Each icon has a Small (3 lines) and Large (5 lines) variant. Multi-layer
//! sprites (cloud + precipitation) are composited with per-layer colors,
//! spaces acting as transparency.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

// ============================================================================
// Sprite data
// ============================================================================

mod sprite_data {
    pub mod sun {
        pub const SMALL: &str = concat!(" \\ | / \n", " - O - \n", " / | \\ ");
        pub const LARGE: &str = concat!(
            "    \\   |   /    \n",
            "      .---.      \n",
            " -- (     ) --   \n",
            "      `---'      \n",
            "    /   |   \\    ",
        );
    }
    pub mod cloud {
        pub const SMALL: &str = concat!("   .--.  \n", " .(    ).\n", "(___.__)_)");
        pub const LARGE: &str = concat!(
            "\n",
            "       .--.      \n",
            "    .-(    ).    \n",
            "   (___.__)__)   \n",
        );
    }
    /// Cloud used as the backdrop for precipitation
    pub mod overcast {
        pub const SMALL: &str = concat!("  .--.   \n", "(____).  ");
        pub const LARGE: &str = concat!(
            "       .--.      \n",
            "    .-(    ).    \n",
            "   (___.__)__)   ",
        );
    }
    pub mod rain {
        pub const SMALL: &str = concat!("\n", "\n", " ' ' ' ");
        pub const LARGE: &str = concat!("\n", "\n", "\n", "    ' ' ' ' '    \n", "   ' ' ' ' '     ");
    }
    pub mod snow {
        pub const SMALL: &str = concat!("\n", "\n", " * * * ");
        pub const LARGE: &str = concat!("\n", "\n", "\n", "    *  *  *  *   \n", "     *  *  *     ");
    }
}

// ============================================================================
// Layer compositing
// ============================================================================

/// A single sprite layer with its content and color
struct SpriteLayer {
    content: &'static str,
    color: Color,
}

/// Composite multiple layers into Text, treating spaces as transparent
fn composite_layers(layers: &[SpriteLayer]) -> Text<'static> {
    if layers.is_empty() {
        return Text::default();
    }

    let layer_lines: Vec<Vec<Vec<char>>> = layers
        .iter()
        .map(|l| l.content.lines().map(|line| line.chars().collect()).collect())
        .collect();

    let max_lines = layer_lines.iter().map(|l| l.len()).max().unwrap_or(0);
    let max_width = layer_lines
        .iter()
        .flat_map(|lines| lines.iter())
        .map(|line| line.len())
        .max()
        .unwrap_or(0);

    let mut result_lines = Vec::with_capacity(max_lines);
    for line_idx in 0..max_lines {
        let mut spans = Vec::with_capacity(max_width);
        for col_idx in 0..max_width {
            // Last layer is the foreground
            let top = layers
                .iter()
                .zip(&layer_lines)
                .rev()
                .find_map(|(layer, lines)| {
                    lines
                        .get(line_idx)
                        .and_then(|line| line.get(col_idx))
                        .filter(|ch| **ch != ' ')
                        .map(|ch| (*ch, layer.color))
                });
            let (ch, color) = top.unwrap_or((' ', Color::Reset));
            spans.push(Span::styled(ch.to_string(), Style::default().fg(color)));
        }
        result_lines.push(Line::from(spans));
    }

    Text::from(result_lines)
}

// ============================================================================
// Types
// ============================================================================

/// Sprite size categories
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteSize {
    /// 3 lines - forecast cells and compact terminals
    Small,
    /// 5 lines - current conditions card
    Large,
}

impl SpriteSize {
    /// Largest sprite that fits the available height, `None` if not even Small.
    pub fn for_height(available: u16) -> Option<Self> {
        match available {
            0..=2 => None,
            3..=4 => Some(SpriteSize::Small),
            _ => Some(SpriteSize::Large),
        }
    }

    pub fn height(self) -> u16 {
        match self {
            SpriteSize::Small => 3,
            SpriteSize::Large => 5,
        }
    }
}

/// Icon variants a condition can map to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WeatherIcon {
    #[default]
    Sun,
    Cloud,
    Rain,
    Snow,
}

/// Pick an icon from a free-text condition. Anything unrecognised is a sun.
pub fn derive_icon(condition: Option<&str>) -> WeatherIcon {
    let condition = condition.unwrap_or_default().to_lowercase();
    let has = |keywords: &[&str]| keywords.iter().any(|k| condition.contains(k));

    if has(&["rain", "drizzle"]) {
        WeatherIcon::Rain
    } else if has(&["snow", "sleet"]) {
        WeatherIcon::Snow
    } else if has(&["cloud", "overcast"]) {
        WeatherIcon::Cloud
    } else {
        WeatherIcon::Sun
    }
}

impl WeatherIcon {
    /// Emoji representation for when sprites don't fit
    pub fn emoji(self) -> &'static str {
        match self {
            WeatherIcon::Sun => "\u{2600}\u{fe0f}",
            WeatherIcon::Cloud => "\u{2601}\u{fe0f}",
            WeatherIcon::Rain => "\u{1f327}\u{fe0f}",
            WeatherIcon::Snow => "\u{2744}\u{fe0f}",
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

const CLOUD_GRAY: Color = Color::Rgb(200, 200, 210);
const CLOUD_DARK: Color = Color::Rgb(160, 160, 175);

pub fn get_sprite(icon: WeatherIcon, size: SpriteSize) -> Text<'static> {
    let pick = |small: &'static str, large: &'static str| match size {
        SpriteSize::Small => small,
        SpriteSize::Large => large,
    };

    let layers = match icon {
        WeatherIcon::Sun => vec![SpriteLayer {
            content: pick(sprite_data::sun::SMALL, sprite_data::sun::LARGE),
            color: Color::Yellow,
        }],
        WeatherIcon::Cloud => vec![SpriteLayer {
            content: pick(sprite_data::cloud::SMALL, sprite_data::cloud::LARGE),
            color: CLOUD_GRAY,
        }],
        WeatherIcon::Rain => vec![
            SpriteLayer {
                content: pick(sprite_data::overcast::SMALL, sprite_data::overcast::LARGE),
                color: CLOUD_DARK,
            },
            SpriteLayer {
                content: pick(sprite_data::rain::SMALL, sprite_data::rain::LARGE),
                color: Color::Rgb(80, 140, 200),
            },
        ],
        WeatherIcon::Snow => vec![
            SpriteLayer {
                content: pick(sprite_data::overcast::SMALL, sprite_data::overcast::LARGE),
                color: CLOUD_DARK,
            },
            SpriteLayer {
                content: pick(sprite_data::snow::SMALL, sprite_data::snow::LARGE),
                color: Color::Rgb(235, 245, 255),
            },
        ],
    };

    composite_layers(&layers)
}
