//! Key mapping: raw crossterm key events to semantic actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{Action, Screen};

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action. Control and Alt
/// chords other than Ctrl+C stay unmapped so the search input can use them
/// for editing.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),

        // Screens
        KeyCode::Char('1') => Some(Action::Navigate(Screen::Menu)),
        KeyCode::Char('2') => Some(Action::Navigate(Screen::Progress)),
        KeyCode::Char('3') => Some(Action::Navigate(Screen::Search)),
        KeyCode::Char('4') => Some(Action::Navigate(Screen::Help)),

        // Cursor
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),

        _ => None,
    }
}
