//! Word bank - per-language candidate words
//!
//! The bank is immutable constant data keyed by language code. Selection is
//! uniform over the list for the requested language; a missing or empty list
//! resolves to [`DEFAULT_WORD`].

use log::warn;

use crate::lookup::find;
use crate::rng::SimpleRng;
use crate::types::DEFAULT_WORD;

/// English candidate words.
pub const ENGLISH_WORDS: [&str; 6] = ["WORLD", "SWIFT", "APPLE", "CODE", "MOBILE", "DEVELOPER"];

/// Georgian candidate words.
pub const GEORGIAN_WORDS: [&str; 6] = [
    "სამყარო",
    "სწრაფი",
    "ვაშლი",
    "კოდი",
    "მობილური",
    "დეველოპერი",
];

/// Built-in table: language code -> ordered word list.
pub const BUILTIN_WORDS: [(&str, &[&str]); 2] = [("en", &ENGLISH_WORDS), ("ka", &GEORGIAN_WORDS)];

type Entry = (&'static str, &'static [&'static str]);

/// Immutable mapping from language code to candidate words.
#[derive(Debug, Clone, Copy)]
pub struct WordBank {
    entries: &'static [Entry],
}

impl WordBank {
    /// Create a bank over a static table.
    pub const fn new(entries: &'static [Entry]) -> Self {
        Self { entries }
    }

    /// The bank shipped with the game (`en` and `ka`).
    pub const fn builtin() -> Self {
        Self::new(&BUILTIN_WORDS)
    }

    /// Candidate words for `language` (empty when the language is unknown).
    pub fn words(&self, language: &str) -> &'static [&'static str] {
        find(self.entries, language).unwrap_or(&[])
    }

    /// Check whether `word` is a candidate for `language`, or the default word.
    pub fn is_candidate(&self, language: &str, word: &str) -> bool {
        let words = self.words(language);
        if words.is_empty() {
            return word == DEFAULT_WORD;
        }
        words.contains(&word)
    }

    /// Pick a word uniformly at random for `language`.
    ///
    /// Falls back to [`DEFAULT_WORD`] when the language key is absent or its
    /// list is empty.
    pub fn pick(&self, language: &str, rng: &mut SimpleRng) -> &'static str {
        match find(self.entries, language) {
            None => {
                warn!("No word list for language '{}', using default word", language);
                DEFAULT_WORD
            }
            Some(words) => rng.pick(words).copied().unwrap_or_else(|| {
                warn!("Empty word list for language '{}', using default word", language);
                DEFAULT_WORD
            }),
        }
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPARSE: [Entry; 2] = [("en", &["CODE"]), ("xx", &[])];

    #[test]
    fn builtin_has_both_languages() {
        let bank = WordBank::builtin();
        assert_eq!(bank.words("en").len(), 6);
        assert_eq!(bank.words("ka").len(), 6);
        assert!(bank.words("fr").is_empty());
    }

    #[test]
    fn english_words_are_uppercase() {
        for w in ENGLISH_WORDS {
            assert_eq!(w, w.to_ascii_uppercase());
        }
    }

    #[test]
    fn pick_returns_member_of_list() {
        let bank = WordBank::builtin();
        let mut rng = SimpleRng::new(7);
        for _ in 0..50 {
            let w = bank.pick("ka", &mut rng);
            assert!(GEORGIAN_WORDS.contains(&w), "unexpected word {}", w);
        }
    }

    #[test]
    fn pick_eventually_covers_every_word() {
        let bank = WordBank::builtin();
        let mut rng = SimpleRng::new(99);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(bank.pick("en", &mut rng));
        }
        assert_eq!(seen.len(), ENGLISH_WORDS.len());
    }

    #[test]
    fn missing_language_falls_back_to_default_word() {
        let bank = WordBank::builtin();
        let mut rng = SimpleRng::new(1);
        assert_eq!(bank.pick("fr", &mut rng), DEFAULT_WORD);
        assert!(bank.is_candidate("fr", DEFAULT_WORD));
    }

    #[test]
    fn empty_list_falls_back_to_default_word() {
        let bank = WordBank::new(&SPARSE);
        let mut rng = SimpleRng::new(1);
        assert_eq!(bank.pick("xx", &mut rng), DEFAULT_WORD);
        assert_eq!(bank.pick("en", &mut rng), "CODE");
    }
}
