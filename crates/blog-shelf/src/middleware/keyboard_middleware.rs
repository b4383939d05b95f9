//! KeyboardMiddleware - translates key presses into pane-specific actions
//!
//! Two layers:
//!
//! ## Layer 1: Priority keys
//! Ctrl+C (quit) and Tab (switch pane) work regardless of focus.
//!
//! ## Layer 2: Focused pane
//! The form takes text input; the task list takes single-key commands.

use crate::actions::{Action, FormAction, GlobalAction, TaskAction, TaskListAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, Focus};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware handles raw key input
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Translate a key press into the action it stands for, if any
    fn translate(&self, key: KeyEvent, state: &AppState) -> Option<Action> {
        // ═══════════════════════════════════════════════════════════════════
        // LAYER 1: Priority keys (always work)
        // ═══════════════════════════════════════════════════════════════════

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Global(GlobalAction::Quit));
        }

        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            return Some(Action::Global(GlobalAction::ToggleFocus));
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 2: Focused pane
        // ═══════════════════════════════════════════════════════════════════

        match state.focus {
            Focus::Form => translate_form_key(key),
            Focus::TaskList => translate_list_key(key),
        }
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

fn translate_form_key(key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        // Ctrl+U - Unix line kill (clear field)
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            FormAction::ClearField
        }
        KeyCode::Char(_)
            if key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(KeyModifiers::ALT) =>
        {
            return None;
        }
        KeyCode::Char(c) => FormAction::Char(c),
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::SUPER) => {
            FormAction::ClearField
        }
        KeyCode::Backspace => FormAction::Backspace,
        KeyCode::Down => FormAction::NextField,
        KeyCode::Up => FormAction::PrevField,
        KeyCode::Enter => FormAction::Submit,
        KeyCode::Esc => FormAction::Cancel,
        _ => return None,
    };
    Some(Action::Form(action))
}

fn translate_list_key(key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Char('q') => Action::Global(GlobalAction::Quit),
        KeyCode::Char('j') | KeyCode::Down => Action::TaskList(TaskListAction::NavigateNext),
        KeyCode::Char('k') | KeyCode::Up => Action::TaskList(TaskListAction::NavigatePrevious),
        KeyCode::Char('g') | KeyCode::Home => Action::TaskList(TaskListAction::NavigateToTop),
        KeyCode::Char('G') | KeyCode::End => Action::TaskList(TaskListAction::NavigateToBottom),
        KeyCode::Char('d') | KeyCode::Delete => Action::TaskList(TaskListAction::DeleteSelected),
        KeyCode::Char('e') | KeyCode::Enter => Action::TaskList(TaskListAction::EditSelected),
        KeyCode::Char('r') => Action::TaskList(TaskListAction::MarkSelectedRead),
        KeyCode::Char('R') | KeyCode::F(5) => Action::Task(TaskAction::FetchAll),
        _ => return None,
    };
    Some(action)
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Global(GlobalAction::KeyPressed(key)) = action else {
            return true;
        };

        match self.translate(*key, state) {
            Some(translated) => {
                log::debug!("KeyboardMiddleware: {:?} -> {:?}", key.code, translated);
                dispatcher.dispatch(translated);
            }
            None => log::trace!("KeyboardMiddleware: unbound key {:?}", key.code),
        }

        false // Raw key presses never reach the reducer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn focused(focus: Focus) -> AppState {
        AppState {
            focus,
            ..AppState::default()
        }
    }

    #[test]
    fn test_ctrl_c_quits_in_every_pane() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for focus in [Focus::Form, Focus::TaskList] {
            let action = KeyboardMiddleware::new().translate(ctrl_c, &focused(focus));
            assert!(matches!(action, Some(Action::Global(GlobalAction::Quit))));
        }
    }

    #[test]
    fn test_form_takes_characters() {
        let action =
            KeyboardMiddleware::new().translate(key(KeyCode::Char('q')), &focused(Focus::Form));
        assert!(matches!(action, Some(Action::Form(FormAction::Char('q')))));
    }

    #[test]
    fn test_list_q_quits() {
        let action =
            KeyboardMiddleware::new().translate(key(KeyCode::Char('q')), &focused(Focus::TaskList));
        assert!(matches!(action, Some(Action::Global(GlobalAction::Quit))));
    }

    #[test]
    fn test_list_commands() {
        let state = focused(Focus::TaskList);
        let mw = KeyboardMiddleware::new();

        assert!(matches!(
            mw.translate(key(KeyCode::Char('d')), &state),
            Some(Action::TaskList(TaskListAction::DeleteSelected))
        ));
        assert!(matches!(
            mw.translate(key(KeyCode::Char('r')), &state),
            Some(Action::TaskList(TaskListAction::MarkSelectedRead))
        ));
        assert!(matches!(
            mw.translate(key(KeyCode::Char('R')), &state),
            Some(Action::Task(TaskAction::FetchAll))
        ));
    }

    #[test]
    fn test_enter_submits_form() {
        let action =
            KeyboardMiddleware::new().translate(key(KeyCode::Enter), &focused(Focus::Form));
        assert!(matches!(action, Some(Action::Form(FormAction::Submit))));
    }

    #[test]
    fn test_tab_toggles_focus() {
        let action =
            KeyboardMiddleware::new().translate(key(KeyCode::Tab), &focused(Focus::Form));
        assert!(matches!(
            action,
            Some(Action::Global(GlobalAction::ToggleFocus))
        ));
    }
}
