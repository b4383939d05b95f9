//! Task Store Reducer
//!
//! Pure transitions of the store document. Each request contributes a
//! pending phase and exactly one settlement (fulfilled or rejected).

use crate::actions::TaskAction;
use crate::domain_models::{RequestId, Task};
use crate::state::TasksState;
use std::collections::HashSet;

/// Remove a settled request from the in-flight set
fn settle(state: &mut TasksState, request: &RequestId) {
    match state.in_flight.remove(request) {
        Some(operation) => log::debug!("{} settled ({})", request, operation),
        None => log::warn!("Settlement for unknown request {}", request),
    }
}

/// Keep the first record for every id
fn dedup_by_id(tasks: &[Task]) -> Vec<Task> {
    let mut seen = HashSet::new();
    let unique: Vec<Task> = tasks
        .iter()
        .filter(|task| seen.insert(task.id.clone()))
        .cloned()
        .collect();

    if unique.len() != tasks.len() {
        log::warn!(
            "Dropped {} records with duplicate ids from list response",
            tasks.len() - unique.len()
        );
    }
    unique
}

/// Reduce the task store based on task actions
pub fn reduce(mut state: TasksState, action: &TaskAction) -> TasksState {
    match action {
        TaskAction::Pending { request, operation } => {
            state.in_flight.insert(*request, operation.clone());
            state.error = None;
            log::debug!("{} pending ({})", request, operation);
        }

        TaskAction::Fetched { request, tasks } => {
            settle(&mut state, request);
            state.task_list = dedup_by_id(tasks);
            log::info!("Loaded {} tasks", state.task_list.len());
        }

        TaskAction::Created { request, task } => {
            settle(&mut state, request);
            if let Some(idx) = state.position(&task.id) {
                log::warn!("Created task {} already in list, replacing", task.id);
                state.task_list[idx] = task.clone();
            } else {
                state.task_list.push(task.clone());
                log::info!("Added task {}", task.id);
            }
        }

        TaskAction::Updated { request, id, task } => {
            settle(&mut state, request);
            if let Some(idx) = state.position(id) {
                state.task_list[idx] = task.clone();
                log::info!("Updated task {}", id);
            } else {
                log::debug!("Update for task {} not in list, dropped", id);
            }
        }

        TaskAction::Deleted { request, id } => {
            settle(&mut state, request);
            let before = state.task_list.len();
            state.task_list.retain(|task| &task.id != id);
            log::info!(
                "Deleted task {} ({} removed)",
                id,
                before - state.task_list.len()
            );
        }

        TaskAction::Failed { request, error } => {
            settle(&mut state, request);
            log::error!("{}: {}", request, error);
            state.error = Some(error.clone());
        }

        // Intents are handled by TaskMiddleware
        TaskAction::FetchAll
        | TaskAction::Create(_)
        | TaskAction::Update { .. }
        | TaskAction::MarkRead(_)
        | TaskAction::Delete(_) => {}
    }

    state
}
