//! Derived round status (never stored).

use crate::types::{SoundCue, PLACEHOLDER};

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundResult {
    Won,
    Lost,
}

impl RoundResult {
    /// One-shot cue played when the round reaches this result.
    pub fn cue(&self) -> SoundCue {
        match self {
            RoundResult::Won => SoundCue::GameWin,
            RoundResult::Lost => SoundCue::GameOver,
        }
    }
}

/// Display state derived from a [`GameState`](crate::GameState).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// One entry per character of the target word: the character when
    /// guessed, otherwise [`PLACEHOLDER`].
    pub masked: Vec<char>,
    pub game_over: bool,
    pub won: bool,
}

impl Status {
    /// Masked word as displayed, letters separated by single spaces.
    ///
    /// # Examples
    ///
    /// ```
    /// use hangman_tui_core::GameState;
    ///
    /// let mut game = GameState::with_word("CODE");
    /// game.guess('C');
    /// assert_eq!(game.status().masked_word(), "C _ _ _");
    /// ```
    pub fn masked_word(&self) -> String {
        let mut out = String::with_capacity(self.masked.len() * 2);
        for (i, ch) in self.masked.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(*ch);
        }
        out
    }

    /// Whether any letter is still hidden.
    pub fn has_placeholders(&self) -> bool {
        self.masked.contains(&PLACEHOLDER)
    }

    pub fn result(&self) -> Option<RoundResult> {
        match (self.game_over, self.won) {
            (false, _) => None,
            (true, true) => Some(RoundResult::Won),
            (true, false) => Some(RoundResult::Lost),
        }
    }
}
