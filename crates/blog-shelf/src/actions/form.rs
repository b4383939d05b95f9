//! Form actions
//!
//! Actions for the add/update form.

use crate::domain_models::Task;

/// Actions for the add/update form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Type a character into the focused field
    Char(char),
    /// Delete the last character of the focused field
    Backspace,
    /// Clear the focused field
    ClearField,
    /// Focus the next field
    NextField,
    /// Focus the previous field
    PrevField,

    /// Request submission (validated by FormMiddleware)
    Submit,
    /// The submission passed validation and the intent was dispatched
    Submitted,
    /// The submission failed validation
    Invalid(String),

    /// Prefill the form with an existing record and enter edit mode
    Edit(Task),
    /// Reset the form and leave edit mode
    Cancel,
}
