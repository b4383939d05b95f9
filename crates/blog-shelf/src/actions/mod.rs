//! Actions module
//!
//! All actions in the application, tagged by the slice they target:
//! - `Global`: application-wide actions (quit, key input, focus)
//! - `Task`: store transitions and the intents that start them
//! - `Form`: edits to the add/update form
//! - `TaskList`: cursor and row actions on the task list

pub mod form;
pub mod global;
pub mod task;
pub mod task_list;

pub use form::FormAction;
pub use global::GlobalAction;
pub use task::TaskAction;
pub use task_list::TaskListAction;

/// Root action enum - tagged by slice
#[derive(Debug, Clone)]
pub enum Action {
    /// Global application actions
    Global(GlobalAction),
    /// Task store intents and lifecycle actions
    Task(TaskAction),
    /// Form actions
    Form(FormAction),
    /// Task list actions
    TaskList(TaskListAction),
}
