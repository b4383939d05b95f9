use crate::domain_models::{Operation, Task};
use crate::state::{AppState, Focus};
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub const LOADING_TEXT: &str = "Loading blogs...";

pub fn status_label(task: &Task) -> &'static str {
    if task.is_read {
        "Completed"
    } else {
        "Pending"
    }
}

/// Render the task list with its count header
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let tasks = &state.tasks;

    let loading = tasks.is_loading_operation(&Operation::List);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Total blogs: {} ", tasks.len()))
        .title_style(theme.accent().add_modifier(Modifier::BOLD))
        .border_style(theme.border(state.focus == Focus::TaskList));

    // A refresh keeps the current records on screen
    if loading && !tasks.is_empty() {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", LOADING_TEXT),
            theme.info(),
        )));
    }

    if tasks.is_empty() {
        let text = if loading {
            Span::styled(LOADING_TEXT, theme.info())
        } else {
            Span::styled("No blogs yet. Tab to the form to add one.", theme.muted())
        };
        let paragraph = Paragraph::new(Line::from(text))
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = tasks
        .task_list
        .iter()
        .map(|task| task_item(task, theme))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selection())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.task_list.selected));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn task_item<'a>(task: &'a Task, theme: &Theme) -> ListItem<'a> {
    let status_style = if task.is_read {
        theme.success()
    } else {
        theme.warning()
    };

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(task.blog_name.as_str(), theme.text().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  #{}", task.id), theme.muted()),
        ]),
        Line::from(vec![
            Span::styled("  Status: ", theme.text_secondary()),
            Span::styled(status_label(task), status_style),
        ]),
        Line::from(Span::styled(format!("  {}", task.blog_img), theme.muted())),
        Line::from(Span::styled(
            format!("  {}", task.blog_content),
            theme.text_secondary(),
        )),
        Line::default(),
    ])
}
