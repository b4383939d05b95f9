//! Status line between the form and the list
//!
//! Shows the failure banner while an error is recorded, otherwise the
//! requests still in flight.

use crate::domain_models::Operation;
use crate::state::{AppState, TasksState};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const ERROR_BANNER: &str = "Oops, Something went wrong!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Busy(String),
    Failed(String),
}

/// Summarize the store's loading and error indicators
pub fn status(tasks: &TasksState) -> Status {
    if let Some(error) = &tasks.error {
        return Status::Failed(error.to_string());
    }
    if tasks.is_loading() {
        let labels: Vec<String> = tasks.in_flight.values().map(Operation::to_string).collect();
        return Status::Busy(format!("Working: {}", labels.join(", ")));
    }
    Status::Idle
}

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let line = match status(&state.tasks) {
        Status::Idle => Line::from(Span::styled(" Ready", theme.muted())),
        Status::Busy(text) => Line::from(Span::styled(format!(" {}", text), theme.info())),
        Status::Failed(diagnostic) => Line::from(vec![
            Span::styled(format!(" {} ", ERROR_BANNER), theme.error()),
            Span::styled(diagnostic, theme.text_secondary()),
        ]),
    };
    f.render_widget(Paragraph::new(line), area);
}
