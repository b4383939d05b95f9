use anyhow::{Context, Result};
use blog_shelf_config::AppConfig;
use mockapi_client::{BlogClient, ReqwestClient};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::time::Duration;

mod actions;
mod background;
mod dispatcher;
mod domain_models;
mod logger;
mod middleware;
mod reducers;
mod state;
mod theme;
mod views;

use actions::{Action, GlobalAction, TaskAction};
use background::{spawn_background_worker, SharedState};
use middleware::{
    form_middleware::FormMiddleware, keyboard_middleware::KeyboardMiddleware,
    logging_middleware::LoggingMiddleware, task_list_middleware::TaskListMiddleware,
    task_middleware::TaskMiddleware, Middleware,
};
use state::AppState;

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting blog-shelf, logging to {}", log_file.display());

    let config = AppConfig::load();
    let api_url = config.api_url()?;
    let client: Arc<dyn BlogClient> = Arc::new(
        ReqwestClient::with_timeout(api_url, config.request_timeout())
            .with_context(|| format!("Failed to create client for {}", api_url))?,
    );
    log::info!("Using collection {}", api_url);

    // action channel: main thread and middleware -> background worker
    // result channel: background worker -> reducers on the main thread
    let (action_tx, action_rx) = mpsc::channel::<Action>();
    let (result_tx, result_rx) = mpsc::channel::<Action>();
    let shared_state: SharedState = Arc::new(RwLock::new(AppState::default()));

    // Middleware executes in this order
    let middleware: Vec<Box<dyn Middleware>> = vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(TaskListMiddleware::new()),
        Box::new(FormMiddleware::new()),
        Box::new(TaskMiddleware::new(client)?),
    ];

    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&shared_state),
        middleware,
    );

    // Initial load
    send(&action_tx, Action::Task(TaskAction::FetchAll));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &action_tx, &result_rx, &shared_state);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Stops the worker if the loop ended without a Quit action
    send(&action_tx, Action::Global(GlobalAction::Quit));
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }

    log::info!("Exiting blog-shelf");
    result
}

fn send(action_tx: &Sender<Action>, action: Action) {
    if let Err(e) = action_tx.send(action) {
        log::warn!("Background worker is gone, dropping {:?}", e.0);
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    action_tx: &Sender<Action>,
    result_rx: &Receiver<Action>,
    shared_state: &SharedState,
) -> Result<()> {
    let mut state = AppState::default();

    loop {
        // Apply everything the middleware let through
        let mut changed = false;
        while let Ok(action) = result_rx.try_recv() {
            state = reducers::app_reducer::reduce(state, &action);
            changed = true;
        }
        if changed {
            match shared_state.write() {
                Ok(mut shared) => *shared = state.clone(),
                Err(e) => log::error!("Failed to update shared state: {}", e),
            }
        }

        terminal.draw(|frame| {
            let area = frame.area();
            views::render(&state, area, frame);
        })?;

        if !state.running {
            break;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    send(action_tx, Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    Ok(())
}
