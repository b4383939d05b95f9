//! Blog client trait
//!
//! This module defines the core `BlogClient` trait that all client
//! implementations must satisfy.

use crate::error::ApiError;
use crate::types::{NewTask, Task, TaskId, TaskPatch};
use async_trait::async_trait;

/// Remote blog collection client
///
/// Each method is a single round trip to the collection. No retries are
/// attempted; failures are returned to the caller as [`ApiError`].
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use mockapi_client::{BlogClient, Task};
///
/// async fn unread(client: &dyn BlogClient) -> Result<Vec<Task>, mockapi_client::ApiError> {
///     let tasks = client.list_tasks().await?;
///     Ok(tasks.into_iter().filter(|t| !t.is_read).collect())
/// }
/// ```
#[async_trait]
pub trait BlogClient: Send + Sync {
    /// Fetch every record in the collection, in server order
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;

    /// Create a record and return it with its server-assigned id
    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError>;

    /// Replace some or all mutable fields of a record
    ///
    /// Returns the record as stored by the server after the update.
    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> Result<Task, ApiError>;

    /// Delete a record
    ///
    /// Any body the server echoes back is ignored.
    async fn delete_task(&self, id: &TaskId) -> Result<(), ApiError>;
}
