use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, ResultPanel, ResultPanelProps, SearchBar, SearchBarProps};
use crate::action::Action;
use crate::state::AppState;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Props for WidgetCard - read-only view of state
pub struct WidgetCardProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
    /// Local wall-clock hour, injected by the render loop
    pub hour: u32,
}

/// The whole widget: header, search bar, submit control, body, help bar
pub struct WidgetCard {
    search: SearchBar,
}

impl Default for WidgetCard {
    fn default() -> Self {
        Self {
            search: SearchBar::new(),
        }
    }
}

impl WidgetCard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for WidgetCard {
    type Props<'a> = WidgetCardProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            match key.code {
                KeyCode::Esc => return vec![Action::Quit],
                // Submit goes through the reducer even while loading; the
                // reducer is what disables it.
                KeyCode::Enter => {
                    return vec![Action::QuerySubmit(props.state.query.to_string())];
                }
                KeyCode::F(2) => return vec![Action::UiToggleUnits],
                _ => {}
            }
        }

        // All other keys go to the input
        self.search
            .handle_event(
                event,
                SearchBarProps {
                    query: &props.state.query,
                    is_focused: true,
                    on_change: Action::QueryChange,
                    on_submit: Action::QuerySubmit,
                },
            )
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Subtitle
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Input
            Constraint::Length(1), // Submit control
            Constraint::Min(1),    // Body
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let title = Line::from(vec![Span::styled(
            "Weather Widget",
            Style::default().fg(Color::White).bold(),
        )])
        .centered();
        frame.render_widget(Paragraph::new(title), chunks[0]);

        let subtitle = Line::from(vec![Span::styled(
            "Enter a location to get the current weather.",
            Style::default().fg(Color::Gray),
        )])
        .centered();
        frame.render_widget(Paragraph::new(subtitle), chunks[1]);

        self.search.render(
            frame,
            chunks[3],
            SearchBarProps {
                query: &props.state.query,
                is_focused: props.is_focused,
                on_change: Action::QueryChange,
                on_submit: Action::QuerySubmit,
            },
        );

        frame.render_widget(Paragraph::new(submit_label(props.state)), chunks[4]);

        let mut body = ResultPanel;
        body.render(
            frame,
            chunks[5],
            ResultPanelProps {
                state: props.state,
                hour: props.hour,
            },
        );

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[6],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("f2", "units"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

/// Submit control: "Search" when idle, an animated "Loading..." while a
/// lookup is outstanding.
fn submit_label(state: &AppState) -> Line<'static> {
    if state.lookup.is_loading() {
        let dots = ".".repeat(1 + (state.tick_count % 3) as usize);
        Line::from(Span::styled(
            format!("[ Loading{dots} ]"),
            Style::default().fg(Color::DarkGray),
        ))
        .centered()
    } else {
        Line::from(Span::styled(
            "[ Search ]",
            Style::default().fg(Color::Cyan).bold(),
        ))
        .centered()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use tui_dispatch::DataResource;
    use tui_dispatch::testing::*;
    use crate::state::WeatherReport;

    fn props(state: &AppState) -> WidgetCardProps<'_> {
        WidgetCardProps {
            state,
            is_focused: true,
            hour: 9,
        }
    }

    #[test]
    fn test_enter_submits_current_query() {
        let mut component = WidgetCard::new();
        let state = AppState::new("Paris");

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(KeyEvent::from(KeyCode::Enter)), props(&state))
            .into_iter()
            .collect();

        assert_eq!(actions, vec![Action::QuerySubmit("Paris".into())]);
    }

    #[test]
    fn test_escape_quits() {
        let mut component = WidgetCard::new();
        let state = AppState::default();

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(KeyEvent::from(KeyCode::Esc)), props(&state))
            .into_iter()
            .collect();

        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn test_f2_toggles_units() {
        let mut component = WidgetCard::new();
        let state = AppState::default();

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(KeyEvent::from(KeyCode::F(2))), props(&state))
            .into_iter()
            .collect();

        assert_eq!(actions, vec![Action::UiToggleUnits]);
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut component = WidgetCard::new();
        let state = AppState::new("Paris");

        let actions: Vec<_> = component
            .handle_event(
                &EventKind::Key(KeyEvent::from(KeyCode::Enter)),
                WidgetCardProps {
                    state: &state,
                    is_focused: false,
                    hour: 9,
                },
            )
            .into_iter()
            .collect();

        assert!(actions.is_empty());
    }

    #[test]
    fn test_render_idle_shows_search_control() {
        let mut render = RenderHarness::new(60, 24);
        let mut component = WidgetCard::new();
        let state = AppState::default();

        let output = render.render_to_string_plain(|frame| {
            component.render(frame, frame.area(), props(&state));
        });

        assert!(output.contains("Weather Widget"));
        assert!(output.contains("Search"));
        assert!(!output.contains("Loading"));
    }

    #[test]
    fn test_render_loading_swaps_the_label() {
        let mut render = RenderHarness::new(60, 24);
        let mut component = WidgetCard::new();

        let state = AppState {
            lookup: DataResource::Loading,
            ..Default::default()
        };

        let output = render.render_to_string_plain(|frame| {
            component.render(frame, frame.area(), props(&state));
        });

        assert!(output.contains("Loading"));
        assert!(!output.contains("[ Search ]"));
    }

    #[test]
    fn test_render_result_and_error_are_exclusive() {
        let mut render = RenderHarness::new(60, 24);
        let mut component = WidgetCard::new();

        let state = AppState {
            lookup: DataResource::Loaded(WeatherReport {
                temperature_c: 22.0,
                condition: "Sunny".into(),
                location: "Paris".into(),
            }),
            ..Default::default()
        };

        let output = render.render_to_string_plain(|frame| {
            component.render(frame, frame.area(), props(&state));
        });

        assert!(output.contains("pleasant 22°C"));
        assert!(output.contains("beautiful sunny day"));
        assert!(!output.contains("City not found"));
    }
}
