//! Terminal Hangman runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `hangman_tui::term`.
//! Logging goes to a file (`--log-file` or `HANGMAN_LOG_PATH`) because the
//! terminal is in raw mode while the game runs.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use hangman_tui::audio::{AssetPlayer, BellPlayer, NullPlayer, SoundPlayer};
use hangman_tui::input::{handle_key_event, should_quit};
use hangman_tui::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use hangman_tui::types::Language;
use hangman_tui::{Preferences, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SoundBackend {
    /// Play `<sounds>/<cue>.wav` with an external player
    Assets,
    /// Ring the terminal bell on mistakes
    Bell,
    /// No sound output
    None,
}

#[derive(Debug, Parser)]
#[command(name = "hangman-tui", version, about = "Bilingual terminal Hangman")]
struct Args {
    /// Language for this session (en, ka); defaults to the saved preference
    #[arg(long, value_parser = parse_language)]
    lang: Option<Language>,

    /// Mute sound effects for this session
    #[arg(long)]
    no_sound: bool,

    /// How sound cues are played
    #[arg(long, value_enum, default_value_t = SoundBackend::Assets)]
    sound_backend: SoundBackend,

    /// Directory holding the sound assets (overrides HANGMAN_SOUNDS_DIR)
    #[arg(long)]
    sounds: Option<PathBuf>,

    /// Preferences file (overrides HANGMAN_PREFS_PATH)
    #[arg(long)]
    prefs: Option<PathBuf>,

    /// Word selection seed (defaults to the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Append logs to this file (overrides HANGMAN_LOG_PATH)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_language(s: &str) -> Result<Language, String> {
    Language::from_code(s).ok_or_else(|| format!("unsupported language '{}' (use en or ka)", s))
}

fn init_logging(log_file: Option<PathBuf>) -> Result<()> {
    let path = log_file.or_else(|| {
        std::env::var("HANGMAN_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    });
    let Some(path) = path else {
        return Ok(());
    };

    let output = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(output)))
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

fn sound_player(backend: SoundBackend, sounds: Option<PathBuf>) -> Box<dyn SoundPlayer> {
    match backend {
        SoundBackend::Assets => {
            let player = AssetPlayer::from_env(sounds);
            info!("sound assets in {}", player.dir().display());
            Box::new(player)
        }
        SoundBackend::Bell => Box::new(BellPlayer::stdout()),
        SoundBackend::None => Box::new(NullPlayer),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.clone())?;

    let prefs_path = Preferences::resolve_path(args.prefs.clone());
    let mut prefs = Preferences::load(&prefs_path);
    if let Some(lang) = args.lang {
        prefs.set_language(lang);
    }
    if args.no_sound {
        prefs.sound_fx = false;
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    let player = sound_player(args.sound_backend, args.sounds.clone());
    let mut session = Session::new(prefs, player, seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &prefs_path);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session, prefs_path: &Path) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!("quit");
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key, &session.alphabet()) {
                    session.apply_action(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }

        if session.take_prefs_dirty() {
            if let Err(e) = session.prefs().save(prefs_path) {
                warn!("could not save preferences: {:#}", e);
            }
        }
    }
}
