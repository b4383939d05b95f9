use crate::state::{AppState, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub mod form_view;
pub mod status_bar;
pub mod task_list_view;

/// Render the entire application UI
///
/// ```text
/// ┌ title ────────────────────────┐
/// │ form (add / update)           │
/// │ status line                   │
/// │ task list                     │
/// │ key hints                     │
/// └───────────────────────────────┘
/// ```
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(form_view::HEIGHT),
            Constraint::Length(1), // Status line
            Constraint::Min(3),    // Task list
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(" MockAPI CRUD Example ", state.theme.accent()),
        Span::styled(
            if state.form.is_editing() {
                "· editing"
            } else {
                "· adding"
            },
            state.theme.muted(),
        ),
    ]);
    f.render_widget(Paragraph::new(title), chunks[0]);

    form_view::render(state, chunks[1], f);
    status_bar::render(state, chunks[2], f);
    task_list_view::render(state, chunks[3], f);
    render_key_hints(state, chunks[4], f);
}

fn render_key_hints(state: &AppState, area: Rect, f: &mut Frame) {
    let hints: &[(&str, &str)] = match state.focus {
        Focus::Form => &[
            ("Tab", "list"),
            ("↑/↓", "field"),
            ("Enter", "submit"),
            ("Esc", "cancel"),
            ("C-u", "clear"),
        ],
        Focus::TaskList => &[
            ("Tab", "form"),
            ("j/k", "move"),
            ("e", "edit"),
            ("r", "done reading"),
            ("d", "delete"),
            ("R", "refresh"),
            ("q", "quit"),
        ],
    };

    // Mark read is only offered for an unread row
    let selected_read = state
        .tasks
        .task_list
        .get(state.task_list.selected)
        .is_none_or(|task| task.is_read);

    let spans: Vec<Span> = hints
        .iter()
        .filter(|(key, _)| !(*key == "r" && selected_read))
        .flat_map(|(key, label)| {
            [
                Span::styled(format!(" {}", key), state.theme.key_hint()),
                Span::styled(format!(" {} ", label), state.theme.muted()),
            ]
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
