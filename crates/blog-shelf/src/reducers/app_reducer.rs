use crate::actions::{Action, FormAction, GlobalAction};
use crate::reducers::{form_reducer, task_list_reducer, task_reducer};
use crate::state::{AppState, Focus};

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    // Handle global actions first
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
            return state;
        }
        Action::Global(GlobalAction::ToggleFocus) => {
            state.focus = state.focus.toggle();
            log::debug!("Focus moved to {:?}", state.focus);
        }
        Action::Form(FormAction::Edit(_)) => {
            state.focus = Focus::Form;
        }
        Action::Form(FormAction::Cancel) => {
            state.focus = Focus::TaskList;
        }
        _ => {}
    }

    // Run sub-reducers for slice-specific actions
    match action {
        Action::Task(task_action) => {
            state.tasks = task_reducer::reduce(state.tasks, task_action);
        }
        Action::TaskList(list_action) => {
            let len = state.tasks.len();
            state.task_list = task_list_reducer::reduce(state.task_list, list_action, len);
        }
        _ => {}
    }
    state.form = form_reducer::reduce(state.form, action);

    // The list may have shrunk under the cursor
    state.task_list.clamp(state.tasks.len());

    state
}
