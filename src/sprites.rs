//! Decorative footer icons
//!
//! Icons are loaded from text files at compile time using `include_str!`.
//! They are purely decorative: one size, one color, no behavior.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

mod icon_data {
    pub const CLOUD: &str = include_str!("../sprites/cloud.txt");
    pub const PIN: &str = include_str!("../sprites/pin.txt");
    pub const THERMOMETER: &str = include_str!("../sprites/thermometer.txt");
}

/// The three static decorations shown under a result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Cloud,
    MapPin,
    Thermometer,
}

impl Icon {
    /// Footer order: cloud, pin, thermometer
    pub const ALL: [Icon; 3] = [Icon::Cloud, Icon::MapPin, Icon::Thermometer];

    fn content(self) -> &'static str {
        match self {
            Icon::Cloud => icon_data::CLOUD,
            Icon::MapPin => icon_data::PIN,
            Icon::Thermometer => icon_data::THERMOMETER,
        }
    }
}

/// Styled lines for one icon, ready to hand to a Paragraph
pub fn icon_text(icon: Icon) -> Text<'static> {
    let style = Style::default().fg(Color::Rgb(150, 150, 160));
    let lines = icon
        .content()
        .lines()
        .map(|line| Line::from(Span::styled(line.to_string(), style)))
        .collect::<Vec<_>>();
    Text::from(lines)
}

/// Tallest icon, for sizing the footer row
pub fn icon_height() -> u16 {
    Icon::ALL
        .iter()
        .map(|icon| icon.content().lines().count())
        .max()
        .unwrap_or(0) as u16
}
