//! Domain models
//!
//! Core domain types used throughout the application.
//! These are pure domain concepts, separate from UI state.

pub mod request;
pub mod task_error;

pub use mockapi_client::{NewTask, Task, TaskId, TaskPatch};
pub use request::{Operation, RequestId};
pub use task_error::TaskError;
