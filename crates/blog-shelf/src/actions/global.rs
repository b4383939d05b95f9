//! Global actions
//!
//! Application-wide actions that are not tied to a specific pane.

use ratatui::crossterm::event::KeyEvent;

/// Global actions
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key press from the terminal, translated by KeyboardMiddleware
    KeyPressed(KeyEvent),
    /// Move focus between the form and the task list
    ToggleFocus,
    /// Quit the application
    Quit,
}
