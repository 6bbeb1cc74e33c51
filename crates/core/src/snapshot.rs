use std::collections::HashSet;

use crate::locale::alphabet;
use crate::status::RoundResult;
use crate::types::{Alphabet, Language};
use crate::GameState;

/// Everything a view needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub language: Language,
    pub alphabet: Alphabet,
    pub sound_fx: bool,
    pub target_word: String,
    pub masked: Vec<char>,
    pub guessed: HashSet<char>,
    pub incorrect_count: u32,
    pub max_attempts: u32,
    pub game_over: bool,
    pub won: bool,
    pub round_id: u32,
}

impl GameSnapshot {
    pub fn result(&self) -> Option<RoundResult> {
        match (self.game_over, self.won) {
            (false, _) => None,
            (true, true) => Some(RoundResult::Won),
            (true, false) => Some(RoundResult::Lost),
        }
    }

    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl GameState {
    /// Capture the round together with the session settings shown on screen.
    pub fn snapshot(&self, language: Language, sound_fx: bool) -> GameSnapshot {
        let status = self.status();
        GameSnapshot {
            language,
            alphabet: alphabet(language.code()),
            sound_fx,
            target_word: self.target_word().to_string(),
            masked: status.masked,
            guessed: self.guessed().clone(),
            incorrect_count: self.incorrect_count(),
            max_attempts: self.max_attempts(),
            game_over: status.game_over,
            won: status.won,
            round_id: self.round_id(),
        }
    }
}
