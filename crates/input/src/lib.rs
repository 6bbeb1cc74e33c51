//! Terminal input module (session-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Letter keys
//! are matched against the active keyboard alphabet, so the same physical key
//! press can be a guess in one language and ignored in another.

pub mod map;

pub use hangman_tui_types as types;

pub use map::{handle_key_event, should_quit};
