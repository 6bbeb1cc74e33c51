use hangman_tui::core::GameState;
use hangman_tui::term::{FrameBuffer, GameView, Viewport};
use hangman_tui::types::Language;

fn render(game: &GameState, language: Language, sound_fx: bool) -> FrameBuffer {
    GameView::default().render(&game.snapshot(language, sound_fx), Viewport::new(80, 24))
}

#[test]
fn fresh_round_shows_title_word_and_keyboard() {
    let game = GameState::with_word("CODE");
    let fb = render(&game, Language::English, true);
    let all = fb.text();

    assert!(fb.row_text(1).contains("Hangman"));
    assert!(all.contains("Incorrect Attempts: 0/10"));
    assert!(all.contains("_ _ _ _"));
    assert!(all.contains(" A "));
    assert!(all.contains(" Z "));
    assert!(all.contains("[English]"));
    assert!(fb.row_text(0).contains("Sound: on [F2]"));
}

#[test]
fn sound_off_is_shown_in_status_bar() {
    let game = GameState::with_word("CODE");
    let fb = render(&game, Language::English, false);
    assert!(fb.row_text(0).contains("Sound: off"));
}

#[test]
fn won_round_replaces_keyboard_with_message() {
    let mut game = GameState::with_word("CODE");
    for ch in "CODE".chars() {
        game.guess(ch);
    }
    let all = render(&game, Language::English, true).text();

    assert!(all.contains("C O D E"));
    assert!(all.contains("You Win!"));
    assert!(all.contains("[Enter] Try New Word"));
    assert!(!all.contains(" Q "));
}

#[test]
fn lost_round_reveals_the_word() {
    let mut game = GameState::with_word("CODE");
    for ch in "ABFGHIJKLM".chars() {
        game.guess(ch);
    }
    let fb = render(&game, Language::English, true);
    let all = fb.text();

    assert!(all.contains("You Lost! The word was CODE"));
    assert!(all.contains("Incorrect Attempts: 10/10"));
    let view = GameView::default();
    let drawn = (view.gallows_top()..view.gallows_top() + view.gallows_height())
        .filter(|&y| !fb.row_text(y).trim().is_empty())
        .count();
    assert_eq!(drawn, view.gallows_height() as usize);
}

#[test]
fn georgian_screen_uses_georgian_text() {
    let mut game = GameState::with_word("კოდი");
    game.guess('კ');
    let fb = render(&game, Language::Georgian, true);
    let all = fb.text();

    assert!(fb.row_text(1).contains("ჩამოხრჩობა"));
    assert!(all.contains("შეცდომები: 0/10"));
    assert!(all.contains("კ _ _ _"));
    assert!(all.contains("[ქართული]"));
    assert!(all.contains(" ჰ "));
    assert!(fb.row_text(0).contains("ხმა: ჩართული [F2]"));
    assert!(fb.row_text(23).contains("Tab ენა"));
    assert!(!all.contains("Sound"));
    assert!(!all.contains("quit"));
}

#[test]
fn georgian_sound_off_label() {
    let game = GameState::with_word("კოდი");
    let fb = render(&game, Language::Georgian, false);
    assert!(fb.row_text(0).contains("ხმა: გამორთული"));
}

#[test]
fn english_help_line_on_last_row() {
    let game = GameState::with_word("CODE");
    let fb = render(&game, Language::English, true);
    assert!(fb.row_text(23).contains("Esc quit · Tab language · F2 sound · F5 new word"));
}

#[test]
fn tiny_viewport_does_not_panic() {
    let game = GameState::with_word("DEVELOPER");
    let view = GameView::default();
    for (w, h) in [(0, 0), (1, 1), (10, 5), (40, 12)] {
        let fb = view.render(&game.snapshot(Language::Georgian, true), Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}
