//! Task Store State
//!
//! The store document: the ordered task list plus loading and error
//! indicators. Loading is tracked per request: each pending request is
//! kept in `in_flight` until its own settlement removes it, so overlapping
//! requests cannot clear each other's loading state.

use crate::domain_models::{Operation, RequestId, Task, TaskError, TaskId};
use std::collections::BTreeMap;

/// The task store document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TasksState {
    /// Records in fetch/insertion order, at most one per id
    pub task_list: Vec<Task>,
    /// Requests sent but not yet settled
    pub in_flight: BTreeMap<RequestId, Operation>,
    /// Diagnostic of the most recent failure, cleared by the next pending request
    pub error: Option<TaskError>,
}

impl TasksState {
    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Whether any request of this kind is still running
    pub fn is_loading_operation(&self, operation: &Operation) -> bool {
        self.in_flight.values().any(|op| op == operation)
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.task_list.iter().find(|task| &task.id == id)
    }

    pub fn position(&self, id: &TaskId) -> Option<usize> {
        self.task_list.iter().position(|task| &task.id == id)
    }

    pub fn len(&self) -> usize {
        self.task_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.task_list.is_empty()
    }
}
