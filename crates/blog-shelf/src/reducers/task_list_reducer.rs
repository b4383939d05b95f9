//! Task List Reducer
//!
//! Cursor movement over the task list. Row actions are translated into
//! intents by TaskListMiddleware and never change this slice directly.

use crate::actions::TaskListAction;
use crate::state::TaskListState;

/// Reduce task list cursor state; `len` is the current number of rows
pub fn reduce(mut state: TaskListState, action: &TaskListAction, len: usize) -> TaskListState {
    match action {
        TaskListAction::NavigateNext => {
            if len > 0 {
                state.selected = (state.selected + 1) % len;
            }
        }

        TaskListAction::NavigatePrevious => {
            if len > 0 {
                state.selected = if state.selected == 0 {
                    len - 1
                } else {
                    state.selected - 1
                };
            }
        }

        TaskListAction::NavigateToTop => {
            state.selected = 0;
        }

        TaskListAction::NavigateToBottom => {
            state.selected = len.saturating_sub(1);
        }

        TaskListAction::DeleteSelected
        | TaskListAction::EditSelected
        | TaskListAction::MarkSelectedRead => {
            // Handled by middleware
        }
    }

    state
}
