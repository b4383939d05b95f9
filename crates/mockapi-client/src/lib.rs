//! MockAPI client for blog records
//!
//! This crate provides a trait-based client for a generic REST resource
//! collection (as served by MockAPI) holding blog-like task records.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                BlogClient trait                  │
//! │  - list_tasks()       GET    {base}              │
//! │  - create_task()      POST   {base}              │
//! │  - update_task()      PUT    {base}/{id}         │
//! │  - delete_task()      DELETE {base}/{id}         │
//! └─────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//!                ┌──────────────────┐
//!                │  ReqwestClient   │
//!                │  (direct API)    │
//!                └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use mockapi_client::{BlogClient, NewTask, ReqwestClient};
//!
//! # async fn example() -> Result<(), mockapi_client::ApiError> {
//! let client = ReqwestClient::new("https://example.mockapi.io/api/v1/blogs")?;
//!
//! let created = client
//!     .create_task(&NewTask::new("Rust", "https://img", "Ownership"))
//!     .await?;
//! let all = client.list_tasks().await?;
//! assert!(all.iter().any(|task| task.id == created.id));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod reqwest_client;
pub mod types;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub use client::BlogClient;
pub use error::ApiError;
pub use reqwest_client::ReqwestClient;
pub use types::{NewTask, Task, TaskId, TaskPatch};
