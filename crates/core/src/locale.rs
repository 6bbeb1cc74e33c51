//! Localization tables - UI strings and keyboard alphabets per language
//!
//! Every lookup goes through [`lookup`](crate::lookup::lookup) and resolves to
//! the English value when a language or a key is missing.

use crate::lookup::lookup;
use crate::types::Alphabet;

/// Keys of localized UI strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    Title,
    IncorrectAttempts,
    YouLost,
    YouWin,
    TryNewWord,
    Language,
    Sound,
    On,
    Off,
    Help,
}

impl TextKey {
    pub const ALL: [TextKey; 10] = [
        TextKey::Title,
        TextKey::IncorrectAttempts,
        TextKey::YouLost,
        TextKey::YouWin,
        TextKey::TryNewWord,
        TextKey::Language,
        TextKey::Sound,
        TextKey::On,
        TextKey::Off,
        TextKey::Help,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextKey::Title => "title",
            TextKey::IncorrectAttempts => "incorrectAttempts",
            TextKey::YouLost => "youLost",
            TextKey::YouWin => "youWin",
            TextKey::TryNewWord => "tryNewWord",
            TextKey::Language => "language",
            TextKey::Sound => "sound",
            TextKey::On => "on",
            TextKey::Off => "off",
            TextKey::Help => "help",
        }
    }

    /// English text, used when a table has no entry for this key.
    pub fn default_text(&self) -> &'static str {
        match self {
            TextKey::Title => "Hangman Game",
            TextKey::IncorrectAttempts => "Incorrect Attempts:",
            TextKey::YouLost => "You Lost! The word was",
            TextKey::YouWin => "You Win!",
            TextKey::TryNewWord => "Try New Word",
            TextKey::Language => "Language",
            TextKey::Sound => "Sound",
            TextKey::On => "on",
            TextKey::Off => "off",
            TextKey::Help => "Esc quit · Tab language · F2 sound · F5 new word",
        }
    }
}

/// One language's `(key, text)` pairs.
pub type Strings = [(&'static str, &'static str)];

const ENGLISH_STRINGS: [(&str, &str); 10] = [
    ("title", "Hangman Game"),
    ("incorrectAttempts", "Incorrect Attempts:"),
    ("youLost", "You Lost! The word was"),
    ("youWin", "You Win!"),
    ("tryNewWord", "Try New Word"),
    ("language", "Language"),
    ("sound", "Sound"),
    ("on", "on"),
    ("off", "off"),
    ("help", "Esc quit · Tab language · F2 sound · F5 new word"),
];

const GEORGIAN_STRINGS: [(&str, &str); 10] = [
    ("title", "ჩამოხრჩობა"),
    ("incorrectAttempts", "შეცდომები:"),
    ("youLost", "თქვენ დამარცხდით! სიტყვა იყო"),
    ("youWin", "თქვენ მოიგეთ!"),
    ("tryNewWord", "სცადეთ ახალი სიტყვა"),
    ("language", "ენა"),
    ("sound", "ხმა"),
    ("on", "ჩართული"),
    ("off", "გამორთული"),
    ("help", "Esc გასვლა · Tab ენა · F2 ხმა · F5 ახალი სიტყვა"),
];

const STRINGS: [(&str, &Strings); 2] = [("en", &ENGLISH_STRINGS), ("ka", &GEORGIAN_STRINGS)];

/// English keyboard.
pub const ENGLISH_ALPHABET: Alphabet = Alphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ");

/// Georgian (Mkhedruli) keyboard.
pub const GEORGIAN_ALPHABET: Alphabet = Alphabet::new("აბგდევზთიკლმნოპჟრსტუფქღყშჩცძწჭხჯჰ");

const ALPHABETS: [(&str, &Alphabet); 2] = [("en", &ENGLISH_ALPHABET), ("ka", &GEORGIAN_ALPHABET)];

/// Localized UI string for `language`, falling back to English.
///
/// # Examples
///
/// ```
/// use hangman_tui_core::locale::{text, TextKey};
///
/// assert_eq!(text("en", TextKey::YouWin), "You Win!");
/// assert_eq!(text("xx", TextKey::Title), "Hangman Game");
/// ```
pub fn text(language: &str, key: TextKey) -> &'static str {
    text_in(lookup(&STRINGS, language, &ENGLISH_STRINGS), key)
}

/// Text for `key` in `table`, or the English default when the table lacks it.
pub fn text_in(table: &Strings, key: TextKey) -> &'static str {
    table
        .iter()
        .find(|(k, _)| *k == key.as_str())
        .map(|&(_, v)| v)
        .unwrap_or_else(|| key.default_text())
}

/// Keyboard alphabet for `language`, falling back to English.
pub fn alphabet(language: &str) -> Alphabet {
    *lookup(&ALPHABETS, language, &ENGLISH_ALPHABET)
}

/// Whether every character of `word` is a key on one of the keyboards.
///
/// Words failing this can never be completed, since the hidden character
/// cannot be guessed.
pub fn is_typeable(word: &str) -> bool {
    !word.is_empty()
        && ALPHABETS
            .iter()
            .any(|(_, a)| word.chars().all(|c| a.contains(c)))
}
