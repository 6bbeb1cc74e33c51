//! Key mapping from terminal events to game actions.

use crate::types::{Alphabet, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Control keys never overlap with letters: Tab switches language, F2 toggles
/// sound, Enter starts a new round once the current one is over and F5 starts
/// one unconditionally. Any other character is a guess if `alphabet` accepts it.
pub fn handle_key_event(key: KeyEvent, alphabet: &Alphabet) -> Option<GameAction> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => Some(GameAction::NextLanguage),
        KeyCode::F(2) => Some(GameAction::ToggleSound),
        KeyCode::Enter => Some(GameAction::NewGame),
        KeyCode::F(5) => Some(GameAction::ForceNewGame),
        KeyCode::Char(ch) => alphabet.normalize(ch).map(GameAction::Guess),
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Letters are guesses, so quitting uses Esc or Ctrl+C.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}
