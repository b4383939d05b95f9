//! Application State

use super::{FormState, TaskListState, TasksState};

/// Pane that receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Form,
    #[default]
    TaskList,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Self::Form => Self::TaskList,
            Self::TaskList => Self::Form,
        }
    }
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub focus: Focus,
    /// The task store document
    pub tasks: TasksState,
    pub form: FormState,
    pub task_list: TaskListState,
    pub theme: crate::theme::Theme,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            focus: Focus::default(),
            tasks: TasksState::default(),
            form: FormState::default(),
            task_list: TaskListState::default(),
            theme: crate::theme::Theme::default(),
        }
    }
}
