pub mod app_reducer;
pub mod form_reducer;
pub mod task_list_reducer;
pub mod task_reducer;
