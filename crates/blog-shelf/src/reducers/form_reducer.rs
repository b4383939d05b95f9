//! Form Reducer
//!
//! Handles edits to the add/update form, and resets it once the request
//! it submitted has been fulfilled.

use crate::actions::{Action, FormAction, TaskAction};
use crate::domain_models::Operation;
use crate::state::FormState;

/// Whether a rejected operation is the one this form submitted
fn is_own_operation(state: &FormState, operation: &Operation) -> bool {
    match (&state.edit_id, operation) {
        (None, Operation::Create) => true,
        (Some(edit_id), Operation::Update(id)) => edit_id == id,
        _ => false,
    }
}

/// Reduce form state based on actions
pub fn reduce(mut state: FormState, action: &Action) -> FormState {
    match action {
        Action::Form(form_action) => match form_action {
            FormAction::Char(c) => {
                state.field_mut(state.focused_field).push(*c);
                state.validation_error = None;
            }

            FormAction::Backspace => {
                state.field_mut(state.focused_field).pop();
            }

            FormAction::ClearField => {
                state.field_mut(state.focused_field).clear();
            }

            FormAction::NextField => {
                state.focused_field = state.focused_field.next();
            }

            FormAction::PrevField => {
                state.focused_field = state.focused_field.prev();
            }

            FormAction::Submitted => {
                state.submitting = true;
                state.validation_error = None;
            }

            FormAction::Invalid(message) => {
                state.validation_error = Some(message.clone());
            }

            FormAction::Edit(task) => {
                log::debug!("Editing task {}", task.id);
                state.load(task);
            }

            FormAction::Cancel => {
                state.reset();
            }

            // Validated by FormMiddleware
            FormAction::Submit => {}
        },

        Action::Task(TaskAction::Created { .. }) if state.submitting && !state.is_editing() => {
            state.reset();
        }

        Action::Task(TaskAction::Updated { id, .. })
            if state.submitting && state.edit_id.as_ref() == Some(id) =>
        {
            state.reset();
        }

        Action::Task(TaskAction::Deleted { id, .. }) if state.edit_id.as_ref() == Some(id) => {
            log::info!("Task {} being edited was deleted, leaving edit mode", id);
            state.reset();
        }

        Action::Task(TaskAction::Failed { error, .. })
            if state.submitting && is_own_operation(&state, &error.operation) =>
        {
            // Keep the input so the user can retry
            state.submitting = false;
        }

        _ => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{RequestId, Task, TaskError, TaskId};
    use crate::state::FormField;
    use pretty_assertions::assert_eq;

    fn task(id: &str) -> Task {
        Task {
            id: TaskId::new(id),
            blog_name: "Name".to_string(),
            blog_img: "img".to_string(),
            blog_content: "body".to_string(),
            is_read: false,
        }
    }

    fn form(action: FormAction) -> Action {
        Action::Form(action)
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let state = reduce(FormState::default(), &form(FormAction::Char('a')));
        let state = reduce(state, &form(FormAction::NextField));
        let state = reduce(state, &form(FormAction::Char('b')));
        let state = reduce(state, &form(FormAction::Char('c')));
        let state = reduce(state, &form(FormAction::Backspace));

        assert_eq!(state.blog_name, "a");
        assert_eq!(state.blog_img, "b");
        assert_eq!(state.focused_field, FormField::Image);
    }

    #[test]
    fn test_clear_field() {
        let mut state = FormState::default();
        state.blog_name = "something".to_string();
        let state = reduce(state, &form(FormAction::ClearField));
        assert!(state.blog_name.is_empty());
    }

    #[test]
    fn test_create_fulfilled_resets_submitting_form() {
        let mut state = FormState::default();
        state.blog_name = "A".to_string();
        let state = reduce(state, &form(FormAction::Submitted));

        let state = reduce(
            state,
            &Action::Task(TaskAction::Created {
                request: RequestId::from_raw(1),
                task: task("1"),
            }),
        );

        assert_eq!(state, FormState::default());
    }

    #[test]
    fn test_create_fulfilled_ignored_when_not_submitting() {
        let mut state = FormState::default();
        state.blog_name = "typing".to_string();

        let state = reduce(
            state,
            &Action::Task(TaskAction::Created {
                request: RequestId::from_raw(1),
                task: task("1"),
            }),
        );

        assert_eq!(state.blog_name, "typing");
    }

    #[test]
    fn test_update_fulfilled_resets_only_for_edited_record() {
        let mut state = FormState::default();
        state.load(&task("5"));
        let state = reduce(state, &form(FormAction::Submitted));

        let other = reduce(
            state.clone(),
            &Action::Task(TaskAction::Updated {
                request: RequestId::from_raw(1),
                id: TaskId::new("6"),
                task: task("6"),
            }),
        );
        assert!(other.is_editing());

        let own = reduce(
            state,
            &Action::Task(TaskAction::Updated {
                request: RequestId::from_raw(2),
                id: TaskId::new("5"),
                task: task("5"),
            }),
        );
        assert!(!own.is_editing());
        assert!(own.blog_name.is_empty());
    }

    #[test]
    fn test_failed_submission_keeps_input() {
        let mut state = FormState::default();
        state.blog_name = "A".to_string();
        let state = reduce(state, &form(FormAction::Submitted));

        let state = reduce(
            state,
            &Action::Task(TaskAction::Failed {
                request: RequestId::from_raw(1),
                error: TaskError::new(Operation::Create, "boom"),
            }),
        );

        assert!(!state.submitting);
        assert_eq!(state.blog_name, "A");
    }

    #[test]
    fn test_deleting_edited_record_leaves_edit_mode() {
        let mut state = FormState::default();
        state.load(&task("5"));

        let state = reduce(
            state,
            &Action::Task(TaskAction::Deleted {
                request: RequestId::from_raw(1),
                id: TaskId::new("5"),
            }),
        );

        assert!(!state.is_editing());
    }

    #[test]
    fn test_invalid_sets_message_and_typing_clears_it() {
        let state = reduce(
            FormState::default(),
            &form(FormAction::Invalid("All fields are required".to_string())),
        );
        assert_eq!(
            state.validation_error.as_deref(),
            Some("All fields are required")
        );

        let state = reduce(state, &form(FormAction::Char('x')));
        assert_eq!(state.validation_error, None);
    }

    #[test]
    fn test_cancel_leaves_edit_mode_and_clears_fields() {
        let mut state = FormState::default();
        state.load(&task("5"));
        assert!(state.is_editing());

        let state = reduce(state, &form(FormAction::Cancel));

        assert_eq!(state, FormState::default());
    }
}
