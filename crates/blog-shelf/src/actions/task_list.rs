//! Task list actions

/// Actions for the task list pane
///
/// Row actions (`*Selected`) act on the record under the cursor and are
/// turned into id-based intents by `TaskListMiddleware`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListAction {
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,

    /// Delete the record under the cursor
    DeleteSelected,
    /// Load the record under the cursor into the form
    EditSelected,
    /// Mark the record under the cursor as read
    MarkSelectedRead,
}
