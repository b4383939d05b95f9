//! Task List Middleware
//!
//! Resolves row actions on the record under the cursor into id-based
//! intents.

use crate::actions::{Action, FormAction, TaskAction, TaskListAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware translating cursor row actions
pub struct TaskListMiddleware;

impl TaskListMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TaskListMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for TaskListMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::TaskList(list_action) = action else {
            return true;
        };

        let selected = state.tasks.task_list.get(state.task_list.selected);
        let next = match (list_action, selected) {
            // Navigation goes to the reducer
            (
                TaskListAction::NavigateNext
                | TaskListAction::NavigatePrevious
                | TaskListAction::NavigateToTop
                | TaskListAction::NavigateToBottom,
                _,
            ) => return true,
            (_, None) => {
                log::debug!("TaskListMiddleware: no task under cursor for {:?}", list_action);
                return false;
            }
            (TaskListAction::DeleteSelected, Some(task)) => {
                Action::Task(TaskAction::Delete(task.id.clone()))
            }
            (TaskListAction::EditSelected, Some(task)) => {
                Action::Form(FormAction::Edit(task.clone()))
            }
            (TaskListAction::MarkSelectedRead, Some(task)) => {
                Action::Task(TaskAction::MarkRead(task.id.clone()))
            }
        };
        dispatcher.dispatch(next);

        false
    }
}
