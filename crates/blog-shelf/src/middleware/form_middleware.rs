//! Form Middleware
//!
//! Validates form submissions and turns them into create/update intents.
//!
//! At most one submission is in flight. The shared snapshot lags behind
//! the reducers, so the middleware follows its own submission through
//! `Pending` and the settlement carrying the same `RequestId`.

use crate::actions::{Action, FormAction, TaskAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{Operation, RequestId};
use crate::middleware::Middleware;
use crate::state::AppState;

/// Intent dispatched by the form, not yet settled
#[derive(Debug)]
struct Submission {
    operation: Operation,
    /// Known once the matching `Pending` has passed through
    request: Option<RequestId>,
}

/// Middleware for form submission
pub struct FormMiddleware {
    submission: Option<Submission>,
}

impl FormMiddleware {
    pub fn new() -> Self {
        Self { submission: None }
    }

    fn submit(&mut self, state: &AppState, dispatcher: &Dispatcher) {
        let form = &state.form;
        if self.submission.is_some() || form.submitting {
            log::debug!("FormMiddleware: submission already in flight");
            return;
        }

        if let Err(message) = form.validate() {
            log::debug!("FormMiddleware: invalid submission: {}", message);
            dispatcher.dispatch(Action::Form(FormAction::Invalid(message)));
            return;
        }

        // Mark the form as submitting before the intent can settle
        dispatcher.dispatch(Action::Form(FormAction::Submitted));

        let (operation, intent) = match &form.edit_id {
            Some(id) => (
                Operation::Update(id.clone()),
                TaskAction::Update {
                    id: id.clone(),
                    patch: form.to_patch(),
                },
            ),
            None => (Operation::Create, TaskAction::Create(form.to_new_task())),
        };
        self.submission = Some(Submission {
            operation,
            request: None,
        });
        dispatcher.dispatch(Action::Task(intent));
    }

    /// Follow the submitted request until it settles
    fn track(&mut self, action: &TaskAction) {
        let Some(submission) = self.submission.as_mut() else {
            return;
        };

        match action {
            TaskAction::Pending { request, operation } => {
                if submission.request.is_none() && operation == &submission.operation {
                    submission.request = Some(*request);
                }
            }
            settled => {
                if settled.request().is_some() && settled.request() == submission.request {
                    log::debug!("FormMiddleware: submission {} settled", submission.operation);
                    self.submission = None;
                }
            }
        }
    }
}

impl Default for FormMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for FormMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Form(FormAction::Submit) => {
                self.submit(state, dispatcher);
                false
            }
            Action::Task(task_action) => {
                self.track(task_action);
                true
            }
            _ => true,
        }
    }
}
