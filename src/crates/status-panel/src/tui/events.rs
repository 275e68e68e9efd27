//! Key classification for the TUI

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Check if a key is a quit key (Ctrl+C, 'q' or Esc)
pub fn is_quit_key(key: KeyEvent) -> bool {
    matches!(
        (key.code, key.modifiers),
        (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('q'), KeyModifiers::NONE)
            | (KeyCode::Esc, KeyModifiers::NONE)
    )
}

/// Check if a key remounts the panel ('r')
pub fn is_remount_key(key: KeyEvent) -> bool {
    matches!(
        (key.code, key.modifiers),
        (KeyCode::Char('r'), KeyModifiers::NONE)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_quit_key_ctrl_c() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_quit_key(key));
    }

    #[test]
    fn test_is_quit_key_q_and_esc() {
        assert!(is_quit_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(!is_quit_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_is_remount_key() {
        assert!(is_remount_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE)));
        assert!(!is_remount_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)));
    }
}
