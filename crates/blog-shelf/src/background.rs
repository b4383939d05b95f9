//! Background worker thread that processes actions through middleware
//!
//! This module implements the background processing architecture where:
//! - Main thread handles rendering, user input and reducers only
//! - Background thread processes all middleware (requests, validation)
//! - Communication happens via channels
//!
//! Actions dispatched by middleware via Dispatcher re-enter the middleware chain,
//! enabling patterns like FormAction::Submit -> TaskAction::Create -> Pending.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::thread;

/// Shared state that background can read (main thread writes via reducer)
pub type SharedState = Arc<RwLock<AppState>>;

/// Spawn the background worker thread
///
/// - `action_rx`: receives actions from main thread and from Dispatcher (re-entry)
/// - `action_tx`: used to create Dispatcher for middleware to dispatch actions that re-enter
/// - `result_tx`: sends actions to main thread for reducers (non-consumed actions)
/// - `state`: shared state for middleware to read
/// - `middleware`: the middleware chain
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, result_tx, state, middleware);
    })
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware>>,
) {
    log::info!("Background worker started");

    // Create dispatcher that re-enters actions through the middleware chain
    let dispatcher = Dispatcher::new(action_tx);

    while let Ok(action) = action_rx.recv() {
        // Get current state snapshot for middleware
        let current_state = match state.read() {
            Ok(s) => s.clone(),
            Err(e) => {
                log::error!("Failed to read shared state: {}", e);
                continue;
            }
        };

        // Run action through middleware chain
        let mut should_forward = true;
        for mw in &mut middleware {
            if !mw.handle(&action, &current_state, &dispatcher) {
                should_forward = false;
                break;
            }
        }

        let is_quit = matches!(action, Action::Global(GlobalAction::Quit));

        // If middleware didn't consume the action, forward to reducer
        if should_forward && result_tx.send(action).is_err() {
            log::error!("Result channel disconnected, shutting down");
            break;
        }

        if is_quit {
            log::info!("Background worker received shutdown signal");
            break;
        }
    }

    log::info!("Background worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{FormAction, TaskAction};
    use crate::middleware::form_middleware::FormMiddleware;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn test_repeated_submit_in_one_batch_creates_once() {
        let mut state = AppState::default();
        state.form.blog_name = "A".to_string();
        state.form.blog_img = "u".to_string();
        state.form.blog_content = "c".to_string();
        let shared: SharedState = Arc::new(RwLock::new(state));

        let (action_tx, action_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();
        let worker = spawn_background_worker(
            action_rx,
            action_tx.clone(),
            result_tx,
            Arc::clone(&shared),
            vec![Box::new(FormMiddleware::new())],
        );

        // The snapshot is never refreshed, as if the main thread were mid-frame
        action_tx.send(Action::Form(FormAction::Submit)).unwrap();
        action_tx.send(Action::Form(FormAction::Submit)).unwrap();

        let mut forwarded = Vec::new();
        while let Ok(action) = result_rx.recv_timeout(Duration::from_millis(200)) {
            forwarded.push(action);
        }

        action_tx.send(Action::Global(GlobalAction::Quit)).unwrap();
        worker.join().unwrap();

        let creates = forwarded
            .iter()
            .filter(|action| matches!(action, Action::Task(TaskAction::Create(_))))
            .count();
        assert_eq!(creates, 1);
    }
}
