//! Keyboard bindings for the interactive UI.
//!
//! Keys are mapped to [`UiAction`]s through a table owned by the event loop,
//! so nothing outside the loop can trigger navigation.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Quit,
    Refresh,
    SelectNext,
    SelectPrevious,
    OpenDetail,
    Back,
}

#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<(KeyCode, UiAction)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: vec![
                (KeyCode::Char('q'), UiAction::Quit),
                (KeyCode::Char('r'), UiAction::Refresh),
                (KeyCode::Down, UiAction::SelectNext),
                (KeyCode::Char('j'), UiAction::SelectNext),
                (KeyCode::Up, UiAction::SelectPrevious),
                (KeyCode::Char('k'), UiAction::SelectPrevious),
                (KeyCode::Enter, UiAction::OpenDetail),
                (KeyCode::Esc, UiAction::Back),
                (KeyCode::Backspace, UiAction::Back),
                (KeyCode::Char('b'), UiAction::Back),
            ],
        }
    }
}

impl KeyBindings {
    /// Adds or replaces the action bound to `code`.
    pub fn bind(&mut self, code: KeyCode, action: UiAction) {
        self.bindings.retain(|(bound, _)| *bound != code);
        self.bindings.push((code, action));
    }

    /// Resolves a key press. Only press events count. Ctrl and Alt chords
    /// are ignored except Ctrl+C, which always quits.
    pub fn action_for(&self, key_event: &KeyEvent) -> Option<UiAction> {
        if key_event.kind != KeyEventKind::Press {
            return None;
        }

        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return (key_event.code == KeyCode::Char('c')).then_some(UiAction::Quit);
        }
        if key_event.modifiers.contains(KeyModifiers::ALT) {
            return None;
        }

        let code = match key_event.code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == code)
            .map(|(_, action)| *action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_default_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(keys.action_for(&press(KeyCode::Char('q'))), Some(UiAction::Quit));
        assert_eq!(keys.action_for(&press(KeyCode::Char('r'))), Some(UiAction::Refresh));
        assert_eq!(keys.action_for(&press(KeyCode::Down)), Some(UiAction::SelectNext));
        assert_eq!(keys.action_for(&press(KeyCode::Char('j'))), Some(UiAction::SelectNext));
        assert_eq!(keys.action_for(&press(KeyCode::Up)), Some(UiAction::SelectPrevious));
        assert_eq!(keys.action_for(&press(KeyCode::Char('k'))), Some(UiAction::SelectPrevious));
        assert_eq!(keys.action_for(&press(KeyCode::Enter)), Some(UiAction::OpenDetail));
        assert_eq!(keys.action_for(&press(KeyCode::Esc)), Some(UiAction::Back));
        assert_eq!(keys.action_for(&press(KeyCode::Backspace)), Some(UiAction::Back));
        assert_eq!(keys.action_for(&press(KeyCode::Char('b'))), Some(UiAction::Back));
        assert_eq!(keys.action_for(&press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_uppercase_and_shift() {
        let keys = KeyBindings::default();
        let shifted = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(keys.action_for(&shifted), Some(UiAction::Quit));
    }

    #[test]
    fn test_ctrl_c_quits_and_other_chords_ignored() {
        let keys = KeyBindings::default();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        let alt_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::ALT);
        assert_eq!(keys.action_for(&ctrl_c), Some(UiAction::Quit));
        assert_eq!(keys.action_for(&ctrl_r), None);
        assert_eq!(keys.action_for(&alt_q), None);
    }

    #[test]
    fn test_release_events_ignored() {
        let keys = KeyBindings::default();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(keys.action_for(&release), None);
    }

    #[test]
    fn test_rebinding() {
        let mut keys = KeyBindings::default();
        keys.bind(KeyCode::Char('b'), UiAction::Refresh);
        assert_eq!(keys.action_for(&press(KeyCode::Char('b'))), Some(UiAction::Refresh));
        assert_eq!(keys.action_for(&press(KeyCode::Esc)), Some(UiAction::Back));
    }
}
