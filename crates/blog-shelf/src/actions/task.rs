//! Task store actions
//!
//! Intents are emitted by the UI and consumed by `TaskMiddleware`, which
//! performs the request and dispatches the lifecycle actions:
//!
//! ```text
//! intent ──► Pending ──► Fetched | Created | Updated | Deleted
//!                    └─► Failed
//! ```

use crate::domain_models::{NewTask, Operation, RequestId, Task, TaskError, TaskId, TaskPatch};

/// Actions for the task store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    // Intents (handled by middleware, never reach the reducer)
    /// Fetch the whole collection
    FetchAll,
    /// Create a record
    Create(NewTask),
    /// Replace some or all fields of a record
    Update { id: TaskId, patch: TaskPatch },
    /// Set `isRead` on a record, leaving every other field untouched
    MarkRead(TaskId),
    /// Delete a record
    Delete(TaskId),

    // Lifecycle
    /// A request was sent
    Pending {
        request: RequestId,
        operation: Operation,
    },
    /// List fulfilled
    Fetched {
        request: RequestId,
        tasks: Vec<Task>,
    },
    /// Create fulfilled with the server-assigned record
    Created { request: RequestId, task: Task },
    /// Update fulfilled with the record as stored by the server
    Updated {
        request: RequestId,
        id: TaskId,
        task: Task,
    },
    /// Delete fulfilled
    Deleted { request: RequestId, id: TaskId },
    /// Any operation rejected
    Failed {
        request: RequestId,
        error: TaskError,
    },
}

impl TaskAction {
    /// Whether this is an intent that middleware must turn into a request
    pub fn is_intent(&self) -> bool {
        matches!(
            self,
            TaskAction::FetchAll
                | TaskAction::Create(_)
                | TaskAction::Update { .. }
                | TaskAction::MarkRead(_)
                | TaskAction::Delete(_)
        )
    }

    /// The request a lifecycle action belongs to
    pub fn request(&self) -> Option<RequestId> {
        match self {
            TaskAction::Pending { request, .. }
            | TaskAction::Fetched { request, .. }
            | TaskAction::Created { request, .. }
            | TaskAction::Updated { request, .. }
            | TaskAction::Deleted { request, .. }
            | TaskAction::Failed { request, .. } => Some(*request),
            _ => None,
        }
    }
}
