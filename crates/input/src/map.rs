//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key event to a game action.
///
/// Releases are ignored; presses and terminal auto-repeats both count.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Up => Some(GameAction::Rotate),
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'a' | 'h' => Some(GameAction::MoveLeft),
            'd' | 'l' => Some(GameAction::MoveRight),
            's' | 'j' => Some(GameAction::SoftDrop),
            'w' | 'k' => Some(GameAction::Rotate),
            'p' => Some(GameAction::Pause),
            'r' => Some(GameAction::Restart),
            _ => None,
        },
        _ => None,
    }
}

/// Check if key should quit the host.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
