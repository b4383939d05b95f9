//! Task List State

/// Cursor over `TasksState::task_list`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListState {
    /// Index of the row under the cursor
    pub selected: usize,
}

impl TaskListState {
    /// Keep the cursor inside a list of `len` rows
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
