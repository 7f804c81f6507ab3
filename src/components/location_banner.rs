use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{Frame, layout::Rect};

use super::Component;
use crate::action::Action;

pub struct LocationBanner;

pub struct LocationBannerProps<'a> {
    /// Headline text, e.g. "Paris at night."
    pub headline: &'a str,
    /// Celsius reading that keys the gradient colors
    pub temperature_c: f64,
}

/// Tallest font in the stack (terminus, 6 rows) plus a spacer row.
/// On shorter terminals artbox falls through to miniwi or plain text.
pub const BANNER_HEIGHT: u16 = 7;

fn gradient_colors(celsius: f64) -> (ArtColor, ArtColor) {
    match celsius {
        t if t < 0.0 => (
            ArtColor::rgb(150, 200, 255), // Ice blue
            ArtColor::rgb(200, 230, 255), // Light ice
        ),
        t if t < 15.0 => (
            ArtColor::rgb(100, 180, 255), // Cool blue
            ArtColor::rgb(150, 220, 200), // Teal
        ),
        t if t < 25.0 => (
            ArtColor::rgb(100, 200, 150), // Green
            ArtColor::rgb(255, 220, 100), // Yellow
        ),
        t if t < 35.0 => (
            ArtColor::rgb(255, 180, 80), // Orange
            ArtColor::rgb(255, 120, 80), // Deep orange
        ),
        _ => (
            ArtColor::rgb(255, 100, 80), // Red-orange
            ArtColor::rgb(255, 60, 60),  // Hot red
        ),
    }
}

impl Component<Action> for LocationBanner {
    type Props<'a> = LocationBannerProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let (start, end) = gradient_colors(props.temperature_c);
        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(Fill::Linear(LinearGradient::horizontal(start, end)));

        frame.render_widget(ArtBox::new(&renderer, props.headline), area);
    }
}
