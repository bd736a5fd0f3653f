use artbox::{
    Alignment as ArtAlignment, ColorStop, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{Frame, layout::Rect};

use super::Component;
use crate::action::Action;
use crate::theme::Theme;

/// Large city name, tinted by the active theme
pub struct LocationHeader;

pub struct LocationHeaderProps<'a> {
    pub location: &'a str,
    pub theme: Theme,
}

/// Rows a FIGlet font needs per tier: terminus(6), miniwi(4), plain(1).
pub const FONT_HEIGHTS: [u16; 3] = [6, 4, 1];

pub fn font_stack() -> Vec<artbox::Font> {
    fonts::stack(&["terminus", "miniwi"])
}

/// Soft diagonal gradient between the theme's text colors
pub fn theme_fill(theme: Theme, angle: f32) -> Fill {
    let (start, end) = theme.text_gradient();
    let mid = start.interpolate(end, 0.5);
    let stops = vec![
        ColorStop::new(0.0, start),
        ColorStop::new(0.5, mid),
        ColorStop::new(1.0, end),
    ];
    Fill::Linear(LinearGradient::new(angle, stops))
}

impl Component<Action> for LocationHeader {
    type Props<'a> = LocationHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let renderer = Renderer::new(font_stack())
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(theme_fill(props.theme, 5.0));

        frame.render_widget(ArtBox::new(&renderer, props.location), area);
    }
}
