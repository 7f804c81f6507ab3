//! Weather widget TUI

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use chrono::Timelike;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_widget::action::Action;
use weather_widget::api;
use weather_widget::components::{Component, WidgetCard, WidgetCardProps};
use weather_widget::effect::Effect;
use weather_widget::messages::LOOKUP_FAILED_MSG;
use weather_widget::reducer::reducer;
use weather_widget::state::{AppState, LOADING_ANIM_TICK_MS};

/// Weather widget - current conditions for a typed-in location
#[derive(Parser, Debug)]
#[command(name = "weather-widget")]
#[command(about = "Look up current weather conditions for a location")]
struct Args {
    /// Pre-fill the location input
    #[arg(long, short, default_value = "")]
    query: String,

    /// WeatherAPI.com API key (falls back to the WEATHER_API_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum WidgetComponentId {
    Card,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum WidgetContext {
    Main,
}

impl EventRoutingState<WidgetComponentId, WidgetContext> for AppState {
    fn focused(&self) -> Option<WidgetComponentId> {
        Some(WidgetComponentId::Card)
    }

    fn modal(&self) -> Option<WidgetComponentId> {
        None
    }

    fn binding_context(&self, _id: WidgetComponentId) -> WidgetContext {
        WidgetContext::Main
    }

    fn default_context(&self) -> WidgetContext {
        WidgetContext::Main
    }
}

/// Diagnostics go to a file, never to the terminal the TUI owns.
/// Set WEATHER_WIDGET_LOG to a file path to enable logging.
fn init_tracing() {
    let Some(log_path) = std::env::var("WEATHER_WIDGET_LOG").ok() else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("Warning: Failed to create log file: {}", log_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        query,
        api_key,
        debug: debug_args,
    } = Args::parse();

    init_tracing();

    let Some(api_key) = api_key.or_else(|| std::env::var("WEATHER_API_KEY").ok()) else {
        eprintln!("Error: no WeatherAPI.com key configured.");
        eprintln!("Set WEATHER_API_KEY or pass --api-key.");
        std::process::exit(1);
    };
    let api_key: Arc<str> = api_key.into();

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(move || async move { Ok::<AppState, io::Error>(AppState::new(query)) })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions, api_key).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct WidgetUi {
    card: WidgetCard,
}

impl WidgetUi {
    fn new() -> Self {
        Self {
            card: WidgetCard::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<WidgetComponentId>,
    ) {
        event_ctx.set_component_area(WidgetComponentId::Card, area);

        let props = WidgetCardProps {
            state,
            is_focused: render_ctx.is_focused(),
            hour: chrono::Local::now().hour(),
        };
        self.card.render(frame, area, props);
    }

    fn handle_card_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = WidgetCardProps {
            state,
            is_focused: true,
            hour: chrono::Local::now().hour(),
        };
        let actions: Vec<_> = self.card.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
    api_key: Arc<str>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(WidgetUi::new()));
    let mut bus: EventBus<AppState, Action, WidgetComponentId, WidgetContext> = EventBus::new();
    let keybindings: Keybindings<WidgetContext> = Keybindings::new();

    let ui_card = Rc::clone(&ui);
    bus.register(WidgetComponentId::Card, move |event, state| {
        ui_card.borrow_mut().handle_card_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            None,
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(LOADING_ANIM_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, api_key.clone()),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, api_key: Arc<str>) {
    match effect {
        Effect::FetchWeather { query } => {
            ctx.tasks().spawn("weather", async move {
                match api::fetch_current(&api_key, &query).await {
                    Ok(report) => Action::WeatherDidLoad(report),
                    Err(error) => {
                        // The user sees one generic message; the cause is
                        // diagnostic-only.
                        tracing::warn!(%query, %error, "weather lookup failed");
                        Action::WeatherDidError(LOOKUP_FAILED_MSG.to_string())
                    }
                }
            });
        }
    }
}
