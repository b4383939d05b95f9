//! Form View
//!
//! The add/update form. Its title and submit hint follow the form mode.

use crate::state::{AppState, Focus, FormField, FormState};
use crate::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by the form, borders included
pub const HEIGHT: u16 = 7;

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let form = &state.form;
    let theme = &state.theme;
    let focused = state.focus == Focus::Form;

    let title = if form.is_editing() {
        " Update Task "
    } else {
        " Add Task "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(theme.accent().add_modifier(Modifier::BOLD))
        .border_style(theme.border(focused));
    f.render_widget(block, area);

    let inner = area.inner(Margin {
        horizontal: 1,
        vertical: 1,
    });

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Blog name
            Constraint::Length(1), // Image URL
            Constraint::Length(1), // Content
            Constraint::Length(1), // Message
            Constraint::Min(0),
        ])
        .split(inner);

    let fields = [
        (FormField::Name, "Blog Name", None),
        (FormField::Image, "Img url", Some("https://...")),
        (FormField::Content, "Blog content", None),
    ];
    for (row, (field, label, placeholder)) in fields.into_iter().enumerate() {
        render_field(
            f,
            chunks[row],
            label,
            form.field(field),
            focused && form.focused_field == field,
            theme,
            placeholder,
        );
    }

    f.render_widget(Paragraph::new(message_line(form, theme)), chunks[3]);
}

fn message_line<'a>(form: &'a FormState, theme: &Theme) -> Line<'a> {
    if let Some(message) = &form.validation_error {
        return Line::from(Span::styled(message.as_str(), theme.warning()));
    }
    if form.submitting {
        let text = if form.is_editing() {
            "Updating..."
        } else {
            "Adding..."
        };
        return Line::from(Span::styled(text, theme.info()));
    }
    Line::default()
}

/// Render a single form field
fn render_field(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
    placeholder: Option<&str>,
) {
    let label_width = 14;
    let indicator = if focused { "> " } else { "  " };

    let label_style = if focused {
        theme.text().add_modifier(Modifier::BOLD)
    } else {
        theme.text()
    };

    let (display_value, value_style) = match (value.is_empty(), placeholder) {
        (true, Some(ph)) => (ph, theme.muted().add_modifier(Modifier::ITALIC)),
        _ => (value, theme.text_secondary()),
    };

    let line = Line::from(vec![
        Span::styled(indicator, theme.accent()),
        Span::styled(
            format!("{:width$}", format!("{}:", label), width = label_width),
            label_style,
        ),
        Span::styled(display_value, value_style),
        if focused {
            Span::styled("▌", theme.accent())
        } else {
            Span::raw("")
        },
    ]);

    f.render_widget(Paragraph::new(line), area);
}
