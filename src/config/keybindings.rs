//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Defaults are less/vim-style.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Bind `key` to `action`, replacing any existing binding.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

impl Default for KeyBindings {
    fn default() -> Self {
        let none = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;
        let shift = KeyModifiers::SHIFT;

        let pairs = [
            // Line scrolling
            (key(KeyCode::Char('j'), none), KeyAction::ScrollDown),
            (key(KeyCode::Down, none), KeyAction::ScrollDown),
            (key(KeyCode::Char('k'), none), KeyAction::ScrollUp),
            (key(KeyCode::Up, none), KeyAction::ScrollUp),
            // Pages
            (key(KeyCode::Char('d'), ctrl), KeyAction::PageDown),
            (key(KeyCode::PageDown, none), KeyAction::PageDown),
            (key(KeyCode::Char('u'), ctrl), KeyAction::PageUp),
            (key(KeyCode::PageUp, none), KeyAction::PageUp),
            // Ends
            (key(KeyCode::Char('g'), none), KeyAction::ScrollToTop),
            (key(KeyCode::Home, none), KeyAction::ScrollToTop),
            (key(KeyCode::Char('G'), shift), KeyAction::ScrollToBottom),
            (key(KeyCode::Char('G'), none), KeyAction::ScrollToBottom),
            (key(KeyCode::End, none), KeyAction::ScrollToBottom),
            // Horizontal
            (key(KeyCode::Char('h'), none), KeyAction::ScrollLeft),
            (key(KeyCode::Left, none), KeyAction::ScrollLeft),
            (key(KeyCode::Char('l'), none), KeyAction::ScrollRight),
            (key(KeyCode::Right, none), KeyAction::ScrollRight),
            // Modes
            (key(KeyCode::Char('f'), none), KeyAction::ToggleFollow),
            (key(KeyCode::Char('w'), none), KeyAction::ToggleWrap),
            (key(KeyCode::Char('t'), none), KeyAction::ToggleTableView),
            // Search and filter
            (key(KeyCode::Char('/'), none), KeyAction::StartSearch),
            (key(KeyCode::Char('\\'), none), KeyAction::StartFilter),
            (key(KeyCode::Char('n'), none), KeyAction::SearchForward),
            (key(KeyCode::Char('N'), shift), KeyAction::SearchBackward),
            (key(KeyCode::Char('N'), none), KeyAction::SearchBackward),
            (key(KeyCode::Esc, none), KeyAction::ClearHighlight),
            // Application
            (key(KeyCode::Char('q'), none), KeyAction::Quit),
            (key(KeyCode::Char('c'), ctrl), KeyAction::Quit),
        ];

        Self {
            bindings: pairs.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_map_lowercase_w_to_toggle_wrap() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE)),
            Some(KeyAction::ToggleWrap),
            "Lowercase 'w' should map to ToggleWrap"
        );
    }

    #[test]
    fn shifted_and_plain_capital_n_search_backward() {
        let bindings = KeyBindings::default();
        for modifiers in [KeyModifiers::SHIFT, KeyModifiers::NONE] {
            assert_eq!(
                bindings.get(KeyEvent::new(KeyCode::Char('N'), modifiers)),
                Some(KeyAction::SearchBackward)
            );
        }
    }

    #[test]
    fn ctrl_c_and_q_quit() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn plain_c_is_unbound() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn bind_replaces_existing_action() {
        let mut bindings = KeyBindings::default();
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        bindings.bind(q, KeyAction::ToggleFollow);
        assert_eq!(bindings.get(q), Some(KeyAction::ToggleFollow));
    }
}
