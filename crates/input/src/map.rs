//! Key mapping from terminal events to snake actions.

use crate::types::{Direction, SnakeAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to snake actions.
///
/// Arrow keys and WASD steer; `r` restarts. Everything else maps to `None`
/// and should be ignored by the caller.
pub fn handle_key_event(key: KeyEvent) -> Option<SnakeAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up.into()),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down.into()),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left.into()),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Direction::Right.into())
        }

        KeyCode::Char('r') | KeyCode::Char('R') => Some(SnakeAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn steer(dir: Direction) -> Option<SnakeAction> {
        Some(SnakeAction::Steer(dir))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), steer(Direction::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Down)), steer(Direction::Down));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), steer(Direction::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Right)), steer(Direction::Right));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('w'))), steer(Direction::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('a'))), steer(Direction::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('s'))), steer(Direction::Down));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('d'))), steer(Direction::Right));

        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT)),
            steer(Direction::Up)
        );
    }

    #[test]
    fn test_restart_key() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(SnakeAction::Restart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT)),
            Some(SnakeAction::Restart)
        );
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char(' '))), None);
        // Ctrl+D is not a steering key.
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Up)));
    }
}
