//! Audio module - fire-and-forget sound cues
//!
//! Game code only ever names a [`SoundCue`]; this crate resolves the cue to an
//! asset file and plays it without blocking the input loop. Nothing here can
//! fail the caller: a missing asset, a missing player program or a spawn error
//! is logged and the cue is skipped.
//!
//! # Players
//!
//! - [`AssetPlayer`]: `<dir>/<cue>.wav`, played by an external program
//! - [`BellPlayer`]: terminal bell for mistakes and lost rounds
//! - [`NullPlayer`]: silent
//! - [`RecordingPlayer`]: remembers cues (headless runs and tests)
//!
//! # Environment Variables
//!
//! - `HANGMAN_SOUNDS_DIR`: asset directory (default `sounds`)
//! - `HANGMAN_SOUND_PLAYER`: player command, split on whitespace; the asset
//!   path is appended as the last argument (default `afplay` on macOS,
//!   `aplay -q` elsewhere)

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::rc::Rc;

use log::{debug, warn};

pub use hangman_tui_types as types;

use crate::types::SoundCue;

/// Asset file extension.
pub const SOUND_EXTENSION: &str = "wav";

/// Default asset directory, relative to the working directory.
pub const DEFAULT_SOUNDS_DIR: &str = "sounds";

/// Something that can play a cue.
///
/// Implementations must return promptly and must not panic on I/O errors.
pub trait SoundPlayer {
    fn play(&mut self, cue: SoundCue);
}

/// Reasons a cue could not be played.
#[derive(Debug)]
pub enum SoundError {
    /// No asset file for the cue.
    Missing(PathBuf),
    /// No player program configured.
    NoPlayer,
    /// The player program could not be started.
    Spawn(io::Error),
}

impl fmt::Display for SoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoundError::Missing(path) => write!(f, "sound file not found: {}", path.display()),
            SoundError::NoPlayer => write!(f, "no sound player configured"),
            SoundError::Spawn(e) => write!(f, "failed to play sound: {}", e),
        }
    }
}

impl std::error::Error for SoundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SoundError::Spawn(e) => Some(e),
            _ => None,
        }
    }
}

/// Plays `<dir>/<cue>.wav` through an external program.
#[derive(Debug, Clone)]
pub struct AssetPlayer {
    dir: PathBuf,
    /// Program followed by its leading arguments.
    command: Vec<String>,
}

impl AssetPlayer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            command: default_command(),
        }
    }

    /// Create from environment variables, with `dir` overriding `HANGMAN_SOUNDS_DIR`.
    pub fn from_env(dir: Option<PathBuf>) -> Self {
        use std::env;

        let dir = dir
            .or_else(|| env::var("HANGMAN_SOUNDS_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOUNDS_DIR));

        let command = env::var("HANGMAN_SOUND_PLAYER")
            .ok()
            .map(|s| s.split_whitespace().map(str::to_string).collect::<Vec<_>>())
            .unwrap_or_else(default_command);

        Self { dir, command }
    }

    /// Replace the player command (empty disables playback).
    pub fn with_command<I, S>(mut self, command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.command = command.into_iter().map(Into::into).collect();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Asset path for `cue`, whether or not it exists.
    pub fn asset_path(&self, cue: SoundCue) -> PathBuf {
        self.dir.join(format!("{}.{}", cue.as_str(), SOUND_EXTENSION))
    }

    /// Existing asset path for `cue`.
    pub fn resolve(&self, cue: SoundCue) -> Result<PathBuf, SoundError> {
        let path = self.asset_path(cue);
        if path.is_file() {
            Ok(path)
        } else {
            Err(SoundError::Missing(path))
        }
    }

    /// Start playback of `cue` without waiting for it to finish.
    pub fn try_play(&self, cue: SoundCue) -> Result<(), SoundError> {
        let path = self.resolve(cue)?;
        let (program, args) = self.command.split_first().ok_or(SoundError::NoPlayer)?;

        let mut child = Command::new(program)
            .args(args)
            .arg(&path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(SoundError::Spawn)?;

        // Reap in the background so finished players do not linger.
        std::thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

impl SoundPlayer for AssetPlayer {
    fn play(&mut self, cue: SoundCue) {
        match self.try_play(cue) {
            Ok(()) => debug!("playing {}", cue.as_str()),
            Err(e) => warn!("{}", e),
        }
    }
}

fn default_command() -> Vec<String> {
    if cfg!(target_os = "macos") {
        vec!["afplay".to_string()]
    } else if cfg!(windows) {
        Vec::new()
    } else {
        vec!["aplay".to_string(), "-q".to_string()]
    }
}

/// Rings the terminal bell on mistakes and lost rounds.
pub struct BellPlayer<W: Write = io::Stdout> {
    out: W,
}

impl BellPlayer {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> BellPlayer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SoundPlayer for BellPlayer<W> {
    fn play(&mut self, cue: SoundCue) {
        if !matches!(cue, SoundCue::WrongAnswer | SoundCue::GameOver) {
            return;
        }
        if let Err(e) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            warn!("failed to ring bell: {}", e);
        }
    }
}

/// Silent player.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPlayer;

impl SoundPlayer for NullPlayer {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Records every cue it is asked to play.
///
/// Clones share the same log, so a caller can keep one handle and hand the
/// other to a [`SoundFx`].
#[derive(Debug, Clone, Default)]
pub struct RecordingPlayer {
    played: Rc<RefCell<Vec<SoundCue>>>,
}

impl RecordingPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cues played so far, oldest first.
    pub fn played(&self) -> Vec<SoundCue> {
        self.played.borrow().clone()
    }

    pub fn clear(&self) {
        self.played.borrow_mut().clear();
    }
}

impl SoundPlayer for RecordingPlayer {
    fn play(&mut self, cue: SoundCue) {
        self.played.borrow_mut().push(cue);
    }
}

/// A player gated by the sound-effects preference.
pub struct SoundFx {
    player: Box<dyn SoundPlayer>,
    enabled: bool,
}

impl SoundFx {
    pub fn new(player: Box<dyn SoundPlayer>, enabled: bool) -> Self {
        Self { player, enabled }
    }

    /// Never plays anything.
    pub fn silent() -> Self {
        Self::new(Box::new(NullPlayer), false)
    }

    pub fn play(&mut self, cue: SoundCue) {
        if !self.enabled {
            debug!("sound off, skipping {}", cue.as_str());
            return;
        }
        self.player.play(cue);
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl fmt::Debug for SoundFx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoundFx")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "hangman-audio-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn asset_path_uses_cue_name() {
        let player = AssetPlayer::new("/tmp/sfx");
        assert_eq!(
            player.asset_path(SoundCue::GameWin),
            PathBuf::from("/tmp/sfx/game_win.wav")
        );
    }

    #[test]
    fn missing_asset_is_reported_not_fatal() {
        let dir = scratch_dir("missing");
        let mut player = AssetPlayer::new(&dir);

        assert!(matches!(
            player.resolve(SoundCue::NewGame),
            Err(SoundError::Missing(_))
        ));
        // Must not panic.
        player.play(SoundCue::NewGame);
    }

    #[test]
    fn empty_command_reports_no_player() {
        let dir = scratch_dir("noplayer");
        std::fs::write(dir.join("wrong_answer.wav"), b"RIFF").unwrap();
        let player = AssetPlayer::new(&dir).with_command(Vec::<String>::new());

        assert!(player.resolve(SoundCue::WrongAnswer).is_ok());
        assert!(matches!(
            player.try_play(SoundCue::WrongAnswer),
            Err(SoundError::NoPlayer)
        ));
    }

    #[test]
    fn unknown_program_reports_spawn_error() {
        let dir = scratch_dir("spawn");
        std::fs::write(dir.join("game_over.wav"), b"RIFF").unwrap();
        let player =
            AssetPlayer::new(&dir).with_command(["hangman-tui-no-such-player-program"]);

        assert!(matches!(
            player.try_play(SoundCue::GameOver),
            Err(SoundError::Spawn(_))
        ));
    }

    #[test]
    fn bell_rings_only_for_bad_news() {
        let mut bell = BellPlayer::new(Vec::new());
        bell.play(SoundCue::CorrectAnswer);
        bell.play(SoundCue::WrongAnswer);
        bell.play(SoundCue::GameWin);
        bell.play(SoundCue::GameOver);
        assert_eq!(bell.into_inner(), b"\x07\x07".to_vec());
    }

    #[test]
    fn disabled_fx_skips_player() {
        let rec = RecordingPlayer::new();
        let mut fx = SoundFx::new(Box::new(rec.clone()), false);
        fx.play(SoundCue::NewGame);
        assert!(rec.played().is_empty());

        fx.set_enabled(true);
        fx.play(SoundCue::NewGame);
        assert_eq!(rec.played(), vec![SoundCue::NewGame]);
    }
}
