use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::DataResource;

use super::location_banner::BANNER_HEIGHT;
use super::{Component, ERROR_ICON, LocationBanner, LocationBannerProps};
use crate::action::Action;
use crate::messages::{condition_message, location_message, temperature_message};
use crate::sprites::{self, Icon};
use crate::state::{AppState, WeatherReport};

/// Body of the card: the error region and the results region.
/// Which one renders is decided by the lookup state; they are never
/// both on screen.
pub struct ResultPanel;

pub struct ResultPanelProps<'a> {
    pub state: &'a AppState,
    /// Local wall-clock hour, injected by the render loop
    pub hour: u32,
}

impl Component<Action> for ResultPanel {
    type Props<'a> = ResultPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match &props.state.lookup {
            DataResource::Empty => render_hint(frame, area),
            DataResource::Loading => render_loading(frame, area),
            DataResource::Failed(message) => render_error(frame, area, message),
            DataResource::Loaded(report) => {
                render_report(frame, area, props.state, report, props.hour);
            }
        }
    }
}

fn render_hint(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);

    let hint = Line::from(vec![
        Span::styled("Type a location and press ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" to search", Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hint), chunks[0]);
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);

    let msg = Line::from(vec![Span::styled(
        "Fetching current conditions...",
        Style::default().fg(Color::DarkGray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(msg), chunks[0]);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // icon
        Constraint::Length(1), // message
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(Paragraph::new(Line::from(ERROR_ICON).centered()), chunks[0]);
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                message.to_string(),
                Style::default().fg(Color::Rgb(220, 90, 90)),
            )])
            .centered(),
        ),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("Enter", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to search again", Style::default().fg(Color::DarkGray)),
            ])
            .centered(),
        ),
        chunks[3],
    );
}

fn render_report(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    report: &WeatherReport,
    hour: u32,
) {
    let chunks = Layout::vertical([
        Constraint::Max(BANNER_HEIGHT),
        Constraint::Length(1), // temperature advice
        Constraint::Length(1), // condition advice
        Constraint::Length(1), // blank
        Constraint::Length(sprites::icon_height()),
    ])
    .flex(Flex::Center)
    .split(area);

    let headline = location_message(&report.location, hour);
    let mut banner = LocationBanner;
    banner.render(
        frame,
        chunks[0],
        LocationBannerProps {
            headline: &headline,
            temperature_c: report.temperature_c,
        },
    );

    let shown = state.unit.convert(report.temperature_c);
    let temp_line = Line::from(vec![Span::styled(
        temperature_message(shown, state.unit),
        Style::default().fg(Color::White),
    )])
    .centered();
    frame.render_widget(Paragraph::new(temp_line), chunks[1]);

    let condition_line = Line::from(vec![Span::styled(
        condition_message(&report.condition),
        Style::default().fg(Color::Gray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(condition_line), chunks[2]);

    render_icons(frame, chunks[4]);
}

fn render_icons(frame: &mut Frame, area: Rect) {
    let thirds = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    for (icon, slot) in Icon::ALL.into_iter().zip(thirds.iter()) {
        frame.render_widget(
            Paragraph::new(sprites::icon_text(icon)).alignment(Alignment::Center),
            *slot,
        );
    }
}
