//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, audio cues).
//!
//! # Round Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_ATTEMPTS` | 10 | Incorrect guesses allowed before the round is lost |
//! | `PLACEHOLDER` | `_` | Shown in the masked word for unguessed letters |
//! | `DEFAULT_WORD` | `WORLD` | Used when a language has no word list |
//! | `DEFAULT_LANGUAGE` | `en` | Used when no language preference is stored |
//!
//! # Gallows Canvas
//!
//! The gallows is drawn on a logical canvas (150 x 250 units by default),
//! anchored to a baseline 20 units above the bottom edge and to the horizontal
//! center. Every stroke is `STROKE_WIDTH` units wide.
//!
//! # Examples
//!
//! ```
//! use hangman_tui_types::{Alphabet, Language, SoundCue, MAX_ATTEMPTS};
//!
//! assert_eq!(Language::from_code("ka"), Some(Language::Georgian));
//! assert_eq!(Language::English.next(), Language::Georgian);
//!
//! assert_eq!(SoundCue::WrongAnswer.as_str(), "wrong_answer");
//!
//! let en = Alphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
//! assert_eq!(en.normalize('q'), Some('Q'));
//! assert_eq!(MAX_ATTEMPTS, 10);
//! ```

/// Incorrect guesses allowed per round.
pub const MAX_ATTEMPTS: u32 = 10;

/// Placeholder character for letters not yet guessed.
pub const PLACEHOLDER: char = '_';

/// Word used when the active language has no (or an empty) word list.
pub const DEFAULT_WORD: &str = "WORLD";

/// Language code used when nothing else is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default logical canvas width for the gallows drawing.
pub const DEFAULT_CANVAS_WIDTH: f32 = 150.0;

/// Default logical canvas height for the gallows drawing.
pub const DEFAULT_CANVAS_HEIGHT: f32 = 250.0;

/// Distance between the bottom edge of the canvas and the drawing baseline.
pub const BASELINE_INSET: f32 = 20.0;

/// Stroke width shared by every gallows draw command.
pub const STROKE_WIDTH: f32 = 3.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_defaults() {
        assert_eq!(MAX_ATTEMPTS, 10);
        assert_eq!(PLACEHOLDER, '_');
        assert_eq!(DEFAULT_WORD, "WORLD");
        assert_eq!(DEFAULT_LANGUAGE, "en");
    }

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("KA"), Some(Language::Georgian));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn language_cycle_visits_every_language() {
        let mut lang = Language::English;
        for _ in 0..Language::ALL.len() {
            lang = lang.next();
        }
        assert_eq!(lang, Language::English);
        assert_ne!(Language::English.next(), Language::English);
    }

    #[test]
    fn sound_cue_names_are_unique() {
        for (i, a) in SoundCue::ALL.iter().enumerate() {
            for b in SoundCue::ALL.iter().skip(i + 1) {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }
}

/// Languages offered by the language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Georgian,
}

impl Language {
    /// Selector order.
    pub const ALL: [Language; 2] = [Language::English, Language::Georgian];

    /// Parse a language code (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use hangman_tui_types::Language;
    ///
    /// assert_eq!(Language::from_code("en"), Some(Language::English));
    /// assert_eq!(Language::from_code("de"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Language::English),
            "ka" => Some(Language::Georgian),
            _ => None,
        }
    }

    /// Code used as the key into word, string and alphabet tables.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Georgian => "ka",
        }
    }

    /// Label shown in the language selector.
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Georgian => "ქართული",
        }
    }

    /// Next language in selector order (wraps around).
    pub fn next(&self) -> Self {
        match self {
            Language::English => Language::Georgian,
            Language::Georgian => Language::English,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

/// Logical sound-effect names.
///
/// Each cue resolves to an audio asset of the same name; a missing asset is
/// never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    CorrectAnswer,
    WrongAnswer,
    GameOver,
    GameWin,
    NewGame,
}

impl SoundCue {
    pub const ALL: [SoundCue; 5] = [
        SoundCue::CorrectAnswer,
        SoundCue::WrongAnswer,
        SoundCue::GameOver,
        SoundCue::GameWin,
        SoundCue::NewGame,
    ];

    /// Asset name (without extension).
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::CorrectAnswer => "correct_answer",
            SoundCue::WrongAnswer => "wrong_answer",
            SoundCue::GameOver => "game_over",
            SoundCue::GameWin => "game_win",
            SoundCue::NewGame => "new_game",
        }
    }
}

/// Player actions that modify the session.
///
/// Produced by the key mapper and consumed by the session's input handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Guess a letter of the active alphabet
    Guess(char),
    /// Switch to the next language in selector order
    NextLanguage,
    /// Toggle sound effects on/off
    ToggleSound,
    /// Start a new round (only once the current round is over)
    NewGame,
    /// Start a new round unconditionally
    ForceNewGame,
}

impl GameAction {
    /// camelCase name, used for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Guess(_) => "guess",
            GameAction::NextLanguage => "nextLanguage",
            GameAction::ToggleSound => "toggleSound",
            GameAction::NewGame => "newGame",
            GameAction::ForceNewGame => "forceNewGame",
        }
    }
}

/// A point on the gallows canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle (origin is the top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Canvas dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}

/// Ordered set of letters offered by the on-screen keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    letters: &'static str,
}

impl Alphabet {
    pub const fn new(letters: &'static str) -> Self {
        Self { letters }
    }

    /// Letters in keyboard order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.chars()
    }

    pub fn as_str(&self) -> &'static str {
        self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.letters.contains(ch)
    }

    /// Map a typed character onto a letter of this alphabet.
    ///
    /// ASCII input is uppercased; scripts without case are matched verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use hangman_tui_types::Alphabet;
    ///
    /// let en = Alphabet::new("ABC");
    /// assert_eq!(en.normalize('b'), Some('B'));
    /// assert_eq!(en.normalize('z'), None);
    ///
    /// let ka = Alphabet::new("აბგ");
    /// assert_eq!(ka.normalize('ბ'), Some('ბ'));
    /// ```
    pub fn normalize(&self, ch: char) -> Option<char> {
        if self.contains(ch) {
            return Some(ch);
        }
        let upper = ch.to_ascii_uppercase();
        if upper != ch && self.contains(upper) {
            return Some(upper);
        }
        None
    }
}
