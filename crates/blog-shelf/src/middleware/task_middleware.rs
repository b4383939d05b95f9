//! Task Middleware
//!
//! Central middleware for all remote collection interactions. Each intent
//! becomes one request:
//! - dispatches `Pending` with a fresh `RequestId`
//! - runs the client call on the tokio runtime
//! - dispatches the fulfilled action, or `Failed` with a `TaskError`
//!
//! Requests are never retried or cancelled.

use crate::actions::{Action, TaskAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{Operation, RequestId, TaskError, TaskId, TaskPatch};
use crate::middleware::Middleware;
use crate::state::AppState;
use anyhow::Context;
use mockapi_client::{ApiError, BlogClient};
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Middleware for all remote task operations
pub struct TaskMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    client: Arc<dyn BlogClient>,
}

impl TaskMiddleware {
    pub fn new(client: Arc<dyn BlogClient>) -> anyhow::Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        Ok(Self { runtime, client })
    }

    /// Dispatch the pending phase and spawn the request
    ///
    /// `call` receives the client and the request id and resolves to the
    /// fulfilled action; an `ApiError` becomes `Failed`.
    fn spawn_request<F, Fut>(&self, operation: Operation, dispatcher: &Dispatcher, call: F)
    where
        F: FnOnce(Arc<dyn BlogClient>, RequestId) -> Fut,
        Fut: Future<Output = Result<TaskAction, ApiError>> + Send + 'static,
    {
        let request = RequestId::next();
        dispatcher.dispatch(Action::Task(TaskAction::Pending {
            request,
            operation: operation.clone(),
        }));

        let future = call(Arc::clone(&self.client), request);
        let dispatcher = dispatcher.clone();

        self.runtime.spawn(async move {
            let outcome = match future.await {
                Ok(action) => action,
                Err(e) => {
                    log::warn!("TaskMiddleware: {} {} failed: {}", request, operation, e);
                    TaskAction::Failed {
                        request,
                        error: TaskError::from_api(operation, &e),
                    }
                }
            };
            dispatcher.dispatch(Action::Task(outcome));
        });
    }

    fn update(&self, id: &TaskId, patch: &TaskPatch, dispatcher: &Dispatcher) {
        if patch.is_empty() {
            log::warn!("TaskMiddleware: empty patch for task {}, not sent", id);
            return;
        }

        let id = id.clone();
        let patch = patch.clone();
        self.spawn_request(
            Operation::Update(id.clone()),
            dispatcher,
            move |client, request| async move {
                let task = client.update_task(&id, &patch).await?;
                Ok::<_, ApiError>(TaskAction::Updated { request, id, task })
            },
        );
    }

    fn handle_intent(&self, action: &TaskAction, state: &AppState, dispatcher: &Dispatcher) {
        match action {
            TaskAction::FetchAll => {
                self.spawn_request(Operation::List, dispatcher, |client, request| async move {
                    let tasks = client.list_tasks().await?;
                    Ok::<_, ApiError>(TaskAction::Fetched { request, tasks })
                });
            }

            TaskAction::Create(new_task) => {
                let new_task = new_task.clone();
                self.spawn_request(
                    Operation::Create,
                    dispatcher,
                    move |client, request| async move {
                        let task = client.create_task(&new_task).await?;
                        Ok::<_, ApiError>(TaskAction::Created { request, task })
                    },
                );
            }

            TaskAction::Update { id, patch } => {
                self.update(id, patch, dispatcher);
            }

            TaskAction::MarkRead(id) => match state.tasks.find(id) {
                Some(task) if task.is_read => {
                    log::debug!("TaskMiddleware: task {} already read", id);
                }
                Some(_) => self.update(id, &TaskPatch::mark_read(), dispatcher),
                None => {
                    log::warn!("TaskMiddleware: mark read for unknown task {}", id);
                }
            },

            TaskAction::Delete(id) => {
                let id = id.clone();
                self.spawn_request(
                    Operation::Delete(id.clone()),
                    dispatcher,
                    move |client, request| async move {
                        client.delete_task(&id).await?;
                        Ok::<_, ApiError>(TaskAction::Deleted { request, id })
                    },
                );
            }

            // Lifecycle actions go to the reducer
            _ => {}
        }
    }
}

impl Middleware for TaskMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Task(task_action) if task_action.is_intent() => {
                self.handle_intent(task_action, state, dispatcher);
                false // Intents never reach the reducer
            }
            _ => true,
        }
    }
}
