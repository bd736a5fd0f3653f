//! Weatherly - look up the weather for a city from the terminal

use std::cell::RefCell;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weatherly::action::Action;
use weatherly::api::WeatherClient;
use weatherly::components::{Component, WeatherDisplay, WeatherDisplayProps};
use weatherly::config::{DEFAULT_ENDPOINT, FORECAST_DAYS, WeatherConfig};
use weatherly::effect::Effect;
use weatherly::reducer::reducer;
use weatherly::state::{AppState, SPINNER_TICK_MS};

/// Weatherly - current conditions and a short forecast for any city
#[derive(Parser, Debug)]
#[command(name = "weatherly")]
#[command(about = "Look up current weather and a 3-day forecast for a city")]
struct Args {
    /// City to look up on startup
    #[arg(long, short)]
    city: Option<String>,

    /// Weather API key, sent as the x-api-key header
    #[arg(long, env = "WEATHER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Weather API endpoint
    #[arg(long, env = "WEATHER_API_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Forecast horizon in days
    #[arg(long, default_value_t = FORECAST_DAYS, value_parser = clap::value_parser!(u8).range(1..=14))]
    days: u8,

    /// Write diagnostic logs to this file (level from RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum WeatherComponentId {
    Display,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum WeatherContext {
    Main,
}

impl EventRoutingState<WeatherComponentId, WeatherContext> for AppState {
    fn focused(&self) -> Option<WeatherComponentId> {
        Some(WeatherComponentId::Display)
    }

    fn modal(&self) -> Option<WeatherComponentId> {
        None
    }

    fn binding_context(&self, id: WeatherComponentId) -> WeatherContext {
        match id {
            WeatherComponentId::Display => WeatherContext::Main,
        }
    }

    fn default_context(&self) -> WeatherContext {
        WeatherContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        city,
        api_key,
        endpoint,
        days,
        log_file,
        debug: debug_args,
    } = Args::parse();

    init_logging(log_file.as_deref())?;

    let config = WeatherConfig {
        endpoint,
        api_key,
        days,
    };
    log::info!("starting with {config:?}");
    let client = WeatherClient::new(config);

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let mut state = debug
        .load_state_or_else_async(move || async move { Ok::<AppState, io::Error>(AppState::new()) })
        .await
        .map_err(debug_error)?;
    if let Some(city) = &city {
        state.query = city.trim().to_string();
    }

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

    let initial_action = city.map(Action::WeatherFetch);
    let result = run_app(
        &mut terminal,
        &debug,
        store,
        client,
        initial_action,
        replay_actions,
    )
    .await;

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

/// Logs go to a file only; stderr belongs to the terminal UI.
fn init_logging(path: Option<&Path>) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

struct WeatherUi {
    display: WeatherDisplay,
}

impl WeatherUi {
    fn new() -> Self {
        Self {
            display: WeatherDisplay::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<WeatherComponentId>,
    ) {
        event_ctx.set_component_area(WeatherComponentId::Display, area);

        let props = WeatherDisplayProps::new(state, render_ctx.is_focused());
        self.display.render(frame, area, props);
    }

    fn handle_display_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = WeatherDisplayProps::new(state, true);
        let actions: Vec<_> = self
            .display
            .handle_event(event, props)
            .into_iter()
            .collect();
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
    client: WeatherClient,
    initial_action: Option<Action>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(WeatherUi::new()));
    let mut bus: EventBus<AppState, Action, WeatherComponentId, WeatherContext> = EventBus::new();
    let keybindings: Keybindings<WeatherContext> = Keybindings::new();

    let ui_display = Rc::clone(&ui);
    bus.register(WeatherComponentId::Display, move |event, state| {
        ui_display
            .borrow_mut()
            .handle_display_event(&event.kind, state)
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
            initial_action,
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "spinner",
                    Duration::from_millis(SPINNER_TICK_MS),
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
            move |effect, ctx| handle_effect(effect, ctx, &client),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, client: &WeatherClient) {
    match effect {
        Effect::FetchWeather { seq, query } => {
            log::info!("fetching weather for {query:?} (request #{seq})");
            let client = client.clone();
            // Same task key: a newer lookup replaces one still in flight
            ctx.tasks().spawn("weather", async move {
                match client.fetch_weather(&query).await {
                    Ok(result) => Action::WeatherDidLoad(seq, result),
                    Err(e) => Action::WeatherDidError(seq, e.to_string()),
                }
            });
        }
    }
}
