//! Add/Update Form State

use crate::domain_models::{NewTask, Task, TaskId, TaskPatch};

/// Form field of the blog form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Image,
    Content,
}

impl FormField {
    /// Move to the next field
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Image,
            Self::Image => Self::Content,
            Self::Content => Self::Name,
        }
    }

    /// Move to the previous field
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Content,
            Self::Image => Self::Name,
            Self::Content => Self::Image,
        }
    }
}

/// State for the add/update form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub blog_name: String,
    pub blog_img: String,
    pub blog_content: String,
    /// Read flag of the record being edited, sent back unchanged
    pub is_read: bool,
    /// Record being edited; `None` means the form adds a new record
    pub edit_id: Option<TaskId>,
    pub focused_field: FormField,
    /// A validated submission is waiting for its request to settle
    pub submitting: bool,
    /// Validation message shown under the form
    pub validation_error: Option<String>,
}

impl FormState {
    /// Reset the form to its default state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Prefill from an existing record and enter edit mode
    pub fn load(&mut self, task: &Task) {
        self.blog_name = task.blog_name.clone();
        self.blog_img = task.blog_img.clone();
        self.blog_content = task.blog_content.clone();
        self.is_read = task.is_read;
        self.edit_id = Some(task.id.clone());
        self.focused_field = FormField::default();
        self.submitting = false;
        self.validation_error = None;
    }

    pub fn is_editing(&self) -> bool {
        self.edit_id.is_some()
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.blog_name,
            FormField::Image => &mut self.blog_img,
            FormField::Content => &mut self.blog_content,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.blog_name,
            FormField::Image => &self.blog_img,
            FormField::Content => &self.blog_content,
        }
    }

    /// Check every field is filled in, returning the message to show if not
    pub fn validate(&self) -> Result<(), String> {
        let missing = [FormField::Name, FormField::Image, FormField::Content]
            .into_iter()
            .any(|field| self.field(field).trim().is_empty());

        if missing {
            Err("All fields are required".to_string())
        } else {
            Ok(())
        }
    }

    /// Candidate record for add mode
    pub fn to_new_task(&self) -> NewTask {
        NewTask::new(
            self.blog_name.trim(),
            self.blog_img.trim(),
            self.blog_content.trim(),
        )
    }

    /// Replacement for edit mode, keeping the record's read flag
    pub fn to_patch(&self) -> TaskPatch {
        TaskPatch::full(
            self.blog_name.trim(),
            self.blog_img.trim(),
            self.blog_content.trim(),
            self.is_read,
        )
    }
}
