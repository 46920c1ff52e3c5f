use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    StepBack,
    StepForward,
    MajorBack,
    MajorForward,
    JumpToStart,
    JumpToEnd,
    PendingG, // First 'g' press, waiting for second 'g'
    ToggleStyle,
    ToggleAxis,
    ToggleResync,
    /// Change the bound value from outside the wheel
    ResetValue,
    Help,
    ExitMode,
    PointerDown { column: u16, row: u16 },
    PointerDrag { column: u16, row: u16 },
    PointerUp,
    /// Mouse wheel notches; positive scrolls toward the upper bound
    Wheel(i64),
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    if app.mode == Mode::Help {
        // Any key closes help
        return Action::ExitMode;
    }

    let binding = KeyBinding::new(key.code, key.modifiers);

    if keymap.is_g_prefix(&binding) {
        return if app.pending_key == Some('g') {
            keymap.get_pending_g_action().cloned().unwrap_or(Action::None)
        } else {
            Action::PendingG
        };
    }

    keymap.get(&binding).cloned().unwrap_or(Action::None)
}

/// Translate a mouse event into a pointer action
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::PointerDown {
            column: mouse.column,
            row: mouse.row,
        },
        MouseEventKind::Drag(MouseButton::Left) => Action::PointerDrag {
            column: mouse.column,
            row: mouse.row,
        },
        MouseEventKind::Up(MouseButton::Left) => Action::PointerUp,
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => Action::Wheel(1),
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => Action::Wheel(-1),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState, KeyModifiers};
    use wheelslider_core::AppConfig;

    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 7,
            row: 2,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_gg_sequence() {
        let keymap = Keymap::default();
        let mut app = App::new(AppConfig::default()).unwrap();
        let g = key(KeyCode::Char('g'), KeyModifiers::NONE);

        assert_eq!(handle_key_event(g, &app, &keymap), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(g, &app, &keymap), Action::JumpToStart);
    }

    #[test]
    fn test_help_mode_swallows_keys() {
        let keymap = Keymap::default();
        let mut app = App::new(AppConfig::default()).unwrap();
        app.mode = Mode::Help;
        let q = key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(q, &app, &keymap), Action::ExitMode);
    }

    #[test]
    fn test_unbound_key() {
        let keymap = Keymap::default();
        let app = App::new(AppConfig::default()).unwrap();
        let z = key(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(z, &app, &keymap), Action::None);
    }

    #[test]
    fn test_mouse_actions() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left))),
            Action::PointerDown { column: 7, row: 2 }
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left))),
            Action::PointerDrag { column: 7, row: 2 }
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left))),
            Action::PointerUp
        );
        assert_eq!(handle_mouse_event(mouse(MouseEventKind::ScrollUp)), Action::Wheel(-1));
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right))),
            Action::None
        );
    }
}
