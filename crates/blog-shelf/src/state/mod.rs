//! Application state
//!
//! One slice per concern, composed into `AppState`.

mod app;
mod form;
mod task_list;
mod tasks;

pub use app::{AppState, Focus};
pub use form::{FormField, FormState};
pub use task_list::TaskListState;
pub use tasks::TasksState;
