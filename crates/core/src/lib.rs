//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the round rules, word selection, localization tables
//! and the gallows drawing. It has **no dependencies** on terminal, audio or
//! file I/O, making it:
//!
//! - **Deterministic**: Same seed picks the same words
//! - **Testable**: Every rule is a plain function or method
//! - **Portable**: Can drive a terminal, a GUI, or a headless test
//!
//! # Module Structure
//!
//! - [`game_state`]: target word, guessed letters, incorrect counter
//! - [`status`]: derived masked word and win/loss
//! - [`gallows`]: threshold table from incorrect count to draw commands
//! - [`word_bank`]: per-language candidate words
//! - [`locale`]: UI strings and keyboard alphabets
//! - [`lookup`]: typed table lookup with fallback
//! - [`rng`]: small deterministic RNG
//! - [`snapshot`]: frame data for views
//!
//! # Game Rules
//!
//! - A round draws one word from the active language's list.
//! - Guessing a letter that is not in the word counts as a mistake.
//! - Ten mistakes lose the round; revealing every letter first wins it.
//! - Guessing the same letter twice, or guessing after the round ended,
//!   changes nothing.
//!
//! # Example
//!
//! ```
//! use hangman_tui_core::GameState;
//!
//! let mut game = GameState::with_word("CODE");
//! for letter in ['C', 'O', 'D', 'E'] {
//!     game.guess(letter);
//! }
//!
//! let status = game.status();
//! assert_eq!(status.masked_word(), "C O D E");
//! assert!(status.game_over);
//! assert!(status.won);
//! ```

pub mod gallows;
pub mod game_state;
pub mod locale;
pub mod lookup;
pub mod rng;
pub mod snapshot;
pub mod status;
pub mod word_bank;

pub use hangman_tui_types as types;

// Re-export commonly used types for convenience
pub use gallows::{render, DrawCommand, Part};
pub use game_state::{GameState, GuessOutcome};
pub use locale::{alphabet, text, TextKey};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
pub use status::{RoundResult, Status};
pub use word_bank::WordBank;
