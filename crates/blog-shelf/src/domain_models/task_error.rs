//! Store-visible failure diagnostic

use super::Operation;
use mockapi_client::ApiError;
use std::fmt;

/// Diagnostic kept in the store after a rejected request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskError {
    /// Operation that failed
    pub operation: Operation,
    /// Human readable message derived from the client error
    pub message: String,
    /// HTTP status when the server answered
    pub status: Option<u16>,
}

impl TaskError {
    pub fn new(operation: Operation, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
            status: None,
        }
    }

    pub fn from_api(operation: Operation, error: &ApiError) -> Self {
        Self {
            operation,
            message: error.to_string(),
            status: error.status(),
        }
    }
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.operation, self.message)
    }
}
