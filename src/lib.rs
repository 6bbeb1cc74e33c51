//! Hangman TUI (workspace facade crate).
//!
//! Re-exports the workspace crates as `hangman_tui::{audio,core,input,term,types}`
//! and hosts the pieces that tie them together: persisted [`prefs`] and the
//! [`session`] input handler.

pub use hangman_tui_audio as audio;
pub use hangman_tui_core as core;
pub use hangman_tui_input as input;
pub use hangman_tui_term as term;
pub use hangman_tui_types as types;

pub mod prefs;
pub mod session;

pub use prefs::Preferences;
pub use session::Session;
