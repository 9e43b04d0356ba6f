//! Key mapping from terminal events to ship controls.

use crate::types::Controls;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a controls sample.
pub fn handle_key_event(key: KeyEvent) -> Option<Controls> {
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Some(Controls::new(-1, 0, false)),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(Controls::new(1, 0, false)),
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(Controls::new(0, -1, false)),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(Controls::new(0, 1, false)),

        // Plasma gun
        KeyCode::Char(' ') => Some(Controls::new(0, 0, true)),

        _ => None,
    }
}

/// Check if key should quit the scene.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
