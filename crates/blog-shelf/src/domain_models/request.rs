//! Request identity
//!
//! Every intent that goes to the server is tagged with a `RequestId` so
//! its settlement can be matched to its pending phase.

use super::TaskId;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier joining a pending action to its fulfilled/rejected action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

impl RequestId {
    /// Allocate a process-unique request id
    pub fn next() -> Self {
        RequestId(NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[cfg(test)]
    pub fn from_raw(value: u64) -> Self {
        RequestId(value)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

/// The remote operation a request performs
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update(TaskId),
    Delete(TaskId),
}

impl Operation {
    /// Short label used in logs and the status line
    pub fn label(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
        }
    }

    /// The record this operation targets, if any
    pub fn task_id(&self) -> Option<&TaskId> {
        match self {
            Self::Update(id) | Self::Delete(id) => Some(id),
            Self::List | Self::Create => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.task_id() {
            Some(id) => write!(f, "{} {}", self.label(), id),
            None => f.write_str(self.label()),
        }
    }
}
