//! Session flow with recorded sound cues and persisted preferences.

use std::path::PathBuf;

use hangman_tui::audio::{BellPlayer, RecordingPlayer, SoundFx, SoundPlayer};
use hangman_tui::core::GameState;
use hangman_tui::input::handle_key_event;
use hangman_tui::types::{GameAction, Language, SoundCue};
use hangman_tui::{Preferences, Session};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn scratch_file(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "hangman-session-{}-{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir.join("nested").join("prefs.json")
}

fn session(word: &str, prefs: Preferences) -> (Session, RecordingPlayer) {
    let rec = RecordingPlayer::new();
    let s = Session::with_game(GameState::with_word(word), prefs, Box::new(rec.clone()));
    (s, rec)
}

fn press(s: &mut Session, code: KeyCode) -> bool {
    let key = KeyEvent::new(code, KeyModifiers::NONE);
    match handle_key_event(key, &s.alphabet()) {
        Some(action) => s.apply_action(action),
        None => false,
    }
}

#[test]
fn typed_keys_play_a_full_round() {
    let (mut s, rec) = session("CODE", Preferences::default());
    for ch in ['c', 'x', 'o', 'd', 'e'] {
        assert!(press(&mut s, KeyCode::Char(ch)));
    }
    assert!(s.game().is_won());
    assert_eq!(
        rec.played(),
        vec![
            SoundCue::CorrectAnswer,
            SoundCue::WrongAnswer,
            SoundCue::CorrectAnswer,
            SoundCue::CorrectAnswer,
            SoundCue::CorrectAnswer,
            SoundCue::GameWin,
        ]
    );

    rec.clear();
    assert!(press(&mut s, KeyCode::Enter));
    assert_eq!(rec.played(), vec![SoundCue::NewGame]);
    assert!(!s.game().is_over());
}

#[test]
fn losing_round_plays_game_over_once() {
    let (mut s, rec) = session("CODE", Preferences::default());
    for ch in "ABFGHIJKLM".chars() {
        s.apply_action(GameAction::Guess(ch));
    }
    assert!(s.game().is_over());
    assert!(!s.apply_action(GameAction::Guess('N')));

    let played = rec.played();
    assert_eq!(played.len(), 11);
    assert_eq!(
        played.iter().filter(|&&c| c == SoundCue::GameOver).count(),
        1
    );
    assert_eq!(played.last(), Some(&SoundCue::GameOver));
}

#[test]
fn force_new_game_mid_round() {
    let (mut s, rec) = session("CODE", Preferences::default());
    s.apply_action(GameAction::Guess('X'));
    assert!(!press(&mut s, KeyCode::Enter));
    assert!(press(&mut s, KeyCode::F(5)));
    assert_eq!(s.game().incorrect_count(), 0);
    assert_eq!(rec.played().last(), Some(&SoundCue::NewGame));
}

#[test]
fn georgian_keyboard_after_tab() {
    let (mut s, _rec) = session("კოდი", Preferences::default());
    assert!(!press(&mut s, KeyCode::Char('კ')));

    assert!(press(&mut s, KeyCode::Tab));
    assert_eq!(s.language(), Language::Georgian);
    assert!(press(&mut s, KeyCode::Char('კ')));
    assert!(s.game().is_guessed('კ'));
    assert!(!press(&mut s, KeyCode::Char('c')));
}

#[test]
fn snapshot_carries_session_settings() {
    let prefs = Preferences {
        sound_fx: false,
        selected_language: "ka".to_string(),
    };
    let (s, _rec) = session("CODE", prefs);
    let snap = s.snapshot();
    assert_eq!(snap.language, Language::Georgian);
    assert!(!snap.sound_fx);
    assert_eq!(snap.alphabet.len(), 33);
}

#[test]
fn preferences_survive_a_restart() {
    let path = scratch_file("restart");
    let (mut s, _rec) = session("CODE", Preferences::load(&path));
    assert_eq!(s.prefs(), &Preferences::default());

    s.apply_action(GameAction::NextLanguage);
    s.apply_action(GameAction::ToggleSound);
    assert!(s.take_prefs_dirty());
    s.prefs().save(&path).unwrap();

    let reloaded = Preferences::load(&path);
    assert_eq!(reloaded.language(), Language::Georgian);
    assert!(!reloaded.sound_fx);

    let raw = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["SoundFX"], serde_json::Value::Bool(false));
    assert_eq!(json["selectedLanguage"], "ka");
}

#[test]
fn corrupt_preferences_fall_back_to_defaults() {
    let path = scratch_file("corrupt");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{ not json").unwrap();

    assert!(Preferences::try_load(&path).is_err());
    assert_eq!(Preferences::load(&path), Preferences::default());
}

#[test]
fn bell_rings_only_on_mistakes() {
    let mut bell = BellPlayer::new(Vec::new());
    for cue in SoundCue::ALL {
        bell.play(cue);
    }
    assert_eq!(bell.into_inner(), b"\x07\x07".to_vec());
}

#[test]
fn muted_sound_fx_skips_player() {
    let rec = RecordingPlayer::new();
    let mut fx = SoundFx::new(Box::new(rec.clone()), false);
    fx.play(SoundCue::GameWin);
    assert!(rec.played().is_empty());

    fx.set_enabled(true);
    fx.play(SoundCue::GameWin);
    assert_eq!(rec.played(), vec![SoundCue::GameWin]);
}
