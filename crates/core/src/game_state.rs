//! Game state module - one round of Hangman
//!
//! Holds the target word, the guessed letters and the incorrect-guess counter.
//! Everything the UI shows (masked word, game over, won) is derived on demand
//! by [`GameState::status`].

use std::collections::HashSet;

use log::{debug, warn};

use crate::locale::is_typeable;
use crate::rng::SimpleRng;
use crate::status::{RoundResult, Status};
use crate::types::{SoundCue, DEFAULT_WORD, MAX_ATTEMPTS, PLACEHOLDER};
use crate::word_bank::WordBank;

/// Result of an accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub letter: char,
    pub correct: bool,
    /// Set when this guess ended the round.
    pub finished: Option<RoundResult>,
}

impl GuessOutcome {
    /// Cue for the guess itself.
    pub fn feedback_cue(&self) -> SoundCue {
        if self.correct {
            SoundCue::CorrectAnswer
        } else {
            SoundCue::WrongAnswer
        }
    }

    /// Cue for the end of the round, if this guess ended it.
    pub fn terminal_cue(&self) -> Option<SoundCue> {
        self.finished.map(|r| r.cue())
    }
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct GameState {
    bank: WordBank,
    rng: SimpleRng,
    target_word: String,
    guessed: HashSet<char>,
    incorrect_count: u32,
    max_attempts: u32,
    /// Monotonic round id (increments on reset).
    round_id: u32,
}

impl GameState {
    /// Start a round in `language` using the built-in word bank.
    pub fn new(seed: u32, language: &str) -> Self {
        Self::with_bank(WordBank::builtin(), seed, language)
    }

    /// Start a round in `language` drawing from `bank`.
    pub fn with_bank(bank: WordBank, seed: u32, language: &str) -> Self {
        let mut rng = SimpleRng::new(seed);
        let word = bank.pick(language, &mut rng);
        Self {
            bank,
            rng,
            target_word: playable_word(word),
            guessed: HashSet::new(),
            incorrect_count: 0,
            max_attempts: MAX_ATTEMPTS,
            round_id: 0,
        }
    }

    /// Start a round with a fixed target word.
    ///
    /// ASCII letters are uppercased. A blank word, or one with characters
    /// missing from every keyboard, becomes [`DEFAULT_WORD`].
    pub fn with_word(word: &str) -> Self {
        Self {
            bank: WordBank::builtin(),
            rng: SimpleRng::default(),
            target_word: playable_word(word),
            guessed: HashSet::new(),
            incorrect_count: 0,
            max_attempts: MAX_ATTEMPTS,
            round_id: 0,
        }
    }

    /// Start a new round: pick a word for `language`, clear guesses and the
    /// incorrect counter.
    pub fn reset(&mut self, language: &str) {
        let word = self.bank.pick(language, &mut self.rng);
        self.target_word = playable_word(word);
        self.guessed.clear();
        self.incorrect_count = 0;
        self.round_id = self.round_id.wrapping_add(1);
        debug!("round {} started ({})", self.round_id, language);
    }

    /// Guess a letter.
    ///
    /// Returns `None` (and changes nothing) when the round is already over or
    /// the letter was guessed before.
    pub fn guess(&mut self, letter: char) -> Option<GuessOutcome> {
        if self.is_over() || self.guessed.contains(&letter) {
            return None;
        }

        self.guessed.insert(letter);
        let correct = self.target_word.contains(letter);
        if !correct {
            self.incorrect_count += 1;
        }

        Some(GuessOutcome {
            letter,
            correct,
            finished: self.status().result(),
        })
    }

    /// Derive the display state.
    pub fn status(&self) -> Status {
        let masked: Vec<char> = self
            .target_word
            .chars()
            .map(|c| {
                if self.guessed.contains(&c) {
                    c
                } else {
                    PLACEHOLDER
                }
            })
            .collect();
        let lost = self.incorrect_count >= self.max_attempts;
        let mut status = Status {
            masked,
            game_over: lost,
            won: false,
        };
        status.game_over = lost || !status.has_placeholders();
        status.won = status.game_over && !lost;
        status
    }

    pub fn is_over(&self) -> bool {
        self.status().game_over
    }

    pub fn is_won(&self) -> bool {
        self.status().won
    }

    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    /// Guessed letters (unordered).
    pub fn guessed(&self) -> &HashSet<char> {
        &self.guessed
    }

    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    pub fn incorrect_count(&self) -> u32 {
        self.incorrect_count
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn remaining_attempts(&self) -> u32 {
        self.max_attempts.saturating_sub(self.incorrect_count)
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn bank(&self) -> &WordBank {
        &self.bank
    }
}

/// Normalize a candidate target: trim, uppercase ASCII, and replace words
/// that cannot be completed on any keyboard with [`DEFAULT_WORD`].
fn playable_word(word: &str) -> String {
    let word = word.trim().to_ascii_uppercase();
    if is_typeable(&word) {
        return word;
    }
    if !word.is_empty() {
        warn!("'{}' cannot be typed on any keyboard, using {}", word, DEFAULT_WORD);
    }
    DEFAULT_WORD.to_string()
}
