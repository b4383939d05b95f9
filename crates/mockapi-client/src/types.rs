//! Wire types for the blog resource collection
//!
//! Field names follow the camelCase JSON used by the remote collection
//! (`blogName`, `blogImg`, `blogContent`, `isRead`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned record identifier
///
/// Immutable once assigned by the server on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A blog record as stored by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    #[serde(default)]
    pub blog_name: String,
    /// Image URL
    #[serde(default)]
    pub blog_img: String,
    #[serde(default)]
    pub blog_content: String,
    #[serde(default)]
    pub is_read: bool,
}

impl Task {
    /// Apply a patch, leaving fields the patch does not carry untouched
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(name) = &patch.blog_name {
            self.blog_name = name.clone();
        }
        if let Some(img) = &patch.blog_img {
            self.blog_img = img.clone();
        }
        if let Some(content) = &patch.blog_content {
            self.blog_content = content.clone();
        }
        if let Some(is_read) = patch.is_read {
            self.is_read = is_read;
        }
    }
}

/// A candidate record without an id, sent on creation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub blog_name: String,
    pub blog_img: String,
    pub blog_content: String,
    pub is_read: bool,
}

impl NewTask {
    pub fn new(
        blog_name: impl Into<String>,
        blog_img: impl Into<String>,
        blog_content: impl Into<String>,
    ) -> Self {
        Self {
            blog_name: blog_name.into(),
            blog_img: blog_img.into(),
            blog_content: blog_content.into(),
            is_read: false,
        }
    }
}

/// Full or partial replacement for an existing record
///
/// Absent fields are not serialized, so the server keeps their values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog_img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,
}

impl TaskPatch {
    /// Patch that only flips the read flag on
    pub fn mark_read() -> Self {
        Self {
            is_read: Some(true),
            ..Self::default()
        }
    }

    /// Patch replacing every mutable field
    pub fn full(
        blog_name: impl Into<String>,
        blog_img: impl Into<String>,
        blog_content: impl Into<String>,
        is_read: bool,
    ) -> Self {
        Self {
            blog_name: Some(blog_name.into()),
            blog_img: Some(blog_img.into()),
            blog_content: Some(blog_content.into()),
            is_read: Some(is_read),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blog_name.is_none()
            && self.blog_img.is_none()
            && self.blog_content.is_none()
            && self.is_read.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Task {
        Task {
            id: TaskId::new("7"),
            blog_name: "Rust".to_string(),
            blog_img: "https://img/7.png".to_string(),
            blog_content: "Borrowing".to_string(),
            is_read: false,
        }
    }

    #[test]
    fn test_task_deserializes_camel_case() {
        let json = r#"{"id":"1","blogName":"A","blogImg":"u","blogContent":"c","isRead":true}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id.as_str(), "1");
        assert_eq!(task.blog_name, "A");
        assert_eq!(task.blog_img, "u");
        assert_eq!(task.blog_content, "c");
        assert!(task.is_read);
    }

    #[test]
    fn test_task_missing_is_read_defaults_to_false() {
        // Records created without the flag come back without it
        let json = r#"{"id":"2","blogName":"A","blogImg":"u","blogContent":"c"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(!task.is_read);
    }

    #[test]
    fn test_mark_read_patch_serializes_only_flag() {
        let json = serde_json::to_value(TaskPatch::mark_read()).unwrap();
        assert_eq!(json, serde_json::json!({ "isRead": true }));
    }

    #[test]
    fn test_apply_mark_read_leaves_other_fields() {
        let mut task = sample();
        task.apply(&TaskPatch::mark_read());

        let mut expected = sample();
        expected.is_read = true;
        assert_eq!(task, expected);
    }

    #[test]
    fn test_apply_full_patch() {
        let mut task = sample();
        task.apply(&TaskPatch::full("B", "v", "d", true));
        assert_eq!(task.id, TaskId::new("7"));
        assert_eq!(task.blog_name, "B");
        assert_eq!(task.blog_img, "v");
        assert_eq!(task.blog_content, "d");
        assert!(task.is_read);
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(TaskPatch::default().is_empty());
        assert!(!TaskPatch::mark_read().is_empty());
    }

    #[test]
    fn test_new_task_has_no_id_on_the_wire() {
        let json = serde_json::to_value(NewTask::new("A", "u", "c")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "blogName": "A",
                "blogImg": "u",
                "blogContent": "c",
                "isRead": false,
            })
        );
    }
}
