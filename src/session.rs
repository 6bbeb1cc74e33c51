//! Session - the single input handler for a running game.
//!
//! Owns the round, the preferences and the sound output. Every player action
//! goes through [`Session::apply_action`], which mutates the round and fires
//! the matching sound cues. Preference changes mark the session dirty so the
//! caller can persist them.

use log::{debug, info};

use crate::audio::{SoundFx, SoundPlayer};
use crate::core::{alphabet, GameSnapshot, GameState};
use crate::prefs::Preferences;
use crate::types::{Alphabet, GameAction, Language, SoundCue};

pub struct Session {
    game: GameState,
    prefs: Preferences,
    sound: SoundFx,
    prefs_dirty: bool,
}

impl Session {
    /// Start a session with a fresh round in the preferred language.
    pub fn new(prefs: Preferences, player: Box<dyn SoundPlayer>, seed: u32) -> Self {
        let game = GameState::new(seed, prefs.language().code());
        Self::with_game(game, prefs, player)
    }

    /// Start a session around an existing round.
    pub fn with_game(game: GameState, prefs: Preferences, player: Box<dyn SoundPlayer>) -> Self {
        let sound = SoundFx::new(player, prefs.sound_fx);
        info!(
            "session started: language={}, sound={}",
            prefs.language().code(),
            prefs.sound_fx
        );
        Self {
            game,
            prefs,
            sound,
            prefs_dirty: false,
        }
    }

    /// Apply a player action. Returns `true` when anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        debug!("action {}", action.as_str());
        match action {
            GameAction::Guess(letter) => self.guess(letter),
            GameAction::NextLanguage => {
                let next = self.language().next();
                self.prefs.set_language(next);
                self.prefs_dirty = true;
                info!("language switched to {}", next.code());
                true
            }
            GameAction::ToggleSound => {
                self.prefs.sound_fx = !self.prefs.sound_fx;
                self.sound.set_enabled(self.prefs.sound_fx);
                self.prefs_dirty = true;
                info!("sound effects {}", if self.prefs.sound_fx { "on" } else { "off" });
                true
            }
            GameAction::NewGame => {
                if !self.game.is_over() {
                    return false;
                }
                self.new_round();
                true
            }
            GameAction::ForceNewGame => {
                self.new_round();
                true
            }
        }
    }

    fn guess(&mut self, letter: char) -> bool {
        if !self.alphabet().contains(letter) {
            debug!("ignoring '{}': not in {} alphabet", letter, self.language().code());
            return false;
        }
        let Some(outcome) = self.game.guess(letter) else {
            return false;
        };

        self.sound.play(outcome.feedback_cue());
        if let Some(cue) = outcome.terminal_cue() {
            info!(
                "round {} over: {:?} ({})",
                self.game.round_id(),
                outcome.finished,
                self.game.target_word()
            );
            self.sound.play(cue);
        }
        true
    }

    fn new_round(&mut self) {
        self.game.reset(self.language().code());
        self.sound.play(SoundCue::NewGame);
    }

    pub fn language(&self) -> Language {
        self.prefs.language()
    }

    /// Keyboard for the selected language.
    pub fn alphabet(&self) -> Alphabet {
        alphabet(self.language().code())
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot(self.language(), self.prefs.sound_fx)
    }

    /// Whether preferences changed since the last call.
    pub fn take_prefs_dirty(&mut self) -> bool {
        std::mem::take(&mut self.prefs_dirty)
    }
}
