//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: status bar (sound, language selector), title,
//! gallows, attempt counter, masked word, then either the on-screen keyboard
//! or the game-over message with the reset prompt, and a help line.

use crate::canvas::{CanvasScale, CellBounds};
use crate::core::gallows::{self, PART_COUNT};
use crate::core::{text, GameSnapshot, RoundResult, TextKey};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Language, Size};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Columns taken by one keyboard key (`" A "` plus a gap).
const KEY_W: u16 = 4;

const INK: Rgb = Rgb::new(230, 230, 230);
const TITLE: Rgb = Rgb::new(255, 255, 255);
const ATTEMPTS: Rgb = Rgb::new(230, 80, 80);
const MESSAGE: Rgb = Rgb::new(90, 150, 255);
const RESET: Rgb = Rgb::new(80, 200, 110);
const KEY_BG: Rgb = Rgb::new(35, 45, 80);
const KEY_HIT: Rgb = Rgb::new(80, 200, 110);
const KEY_MISS: Rgb = Rgb::new(150, 70, 70);
const MUTED: Rgb = Rgb::new(130, 130, 140);

/// A lightweight terminal renderer for the Hangman screen.
pub struct GameView {
    scale: CanvasScale,
    canvas: Size,
    /// Cells covered by the complete drawing; only this band is laid out.
    band: CellBounds,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(CanvasScale::default(), Size::default())
    }
}

impl GameView {
    pub fn new(scale: CanvasScale, canvas: Size) -> Self {
        let full = gallows::render(PART_COUNT as u32, canvas);
        let band = scale.bounds(&full).unwrap_or(CellBounds {
            min_col: 0,
            min_row: 0,
            max_col: 0,
            max_row: 0,
        });
        Self {
            scale,
            canvas,
            band,
        }
    }

    /// Rows reserved for the gallows.
    pub fn gallows_height(&self) -> u16 {
        self.band.height()
    }

    /// First row of the gallows band.
    pub fn gallows_top(&self) -> u16 {
        2
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let lang = snap.language.code();

        self.draw_status_bar(fb, snap);
        fb.put_str_centered(1, text(lang, TextKey::Title), CellStyle::fg(TITLE).bold());

        let top = self.gallows_top();
        self.draw_gallows(fb, snap.incorrect_count, top);

        let mut y = top.saturating_add(self.gallows_height());
        let attempts = format!(
            "{} {}/{}",
            text(lang, TextKey::IncorrectAttempts),
            snap.incorrect_count,
            snap.max_attempts
        );
        fb.put_str_centered(y, &attempts, CellStyle::fg(ATTEMPTS).bold());
        y = y.saturating_add(1);

        fb.put_str_centered(y, &masked_word(&snap.masked), CellStyle::fg(TITLE).bold());
        y = y.saturating_add(2);

        match snap.result() {
            Some(result) => self.draw_game_over(fb, snap, result, y),
            None => self.draw_keyboard(fb, snap, y),
        }

        if viewport.height > 0 {
            fb.put_str_centered(
                viewport.height - 1,
                text(lang, TextKey::Help),
                CellStyle::fg(MUTED).dim(),
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_status_bar(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let lang = snap.language.code();
        let label = CellStyle::fg(MUTED);
        let value = CellStyle::fg(INK).bold();

        let x = fb.put_str(1, 0, text(lang, TextKey::Sound), label);
        let x = fb.put_str(x, 0, ": ", label);
        let state = if snap.sound_fx { TextKey::On } else { TextKey::Off };
        let x = fb.put_str(x, 0, text(lang, state), value);
        fb.put_str(x, 0, " [F2]", label);

        // Right-aligned selector: "Language: [English] ქართული [Tab]"
        let mut selector_w = text(lang, TextKey::Language).chars().count() + 2 + " [Tab]".len();
        for l in Language::ALL {
            selector_w += l.label().chars().count() + 3;
        }
        let selector_w = selector_w.min(u16::MAX as usize) as u16;
        let mut x = fb.width().saturating_sub(selector_w.saturating_add(1));
        x = fb.put_str(x, 0, text(lang, TextKey::Language), label);
        x = fb.put_str(x, 0, ": ", label);
        for l in Language::ALL {
            if l == snap.language {
                x = fb.put_str(x, 0, "[", value);
                x = fb.put_str(x, 0, l.label(), value);
                x = fb.put_str(x, 0, "] ", value);
            } else {
                x = fb.put_str(x, 0, " ", label);
                x = fb.put_str(x, 0, l.label(), label);
                x = fb.put_str(x, 0, "  ", label);
            }
        }
        fb.put_str(x, 0, "[Tab]", label);
    }

    fn draw_gallows(&self, fb: &mut FrameBuffer, incorrect_count: u32, top: u16) {
        let cmds = gallows::render(incorrect_count, self.canvas);
        let left = fb.width().saturating_sub(self.band.width()) / 2;
        let origin_x = left as i32 - self.band.min_col;
        let origin_y = top as i32 - self.band.min_row;
        self.scale
            .rasterize(fb, &cmds, origin_x, origin_y, CellStyle::fg(INK));
    }

    fn draw_keyboard(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, top: u16) {
        let letters: Vec<char> = snap.alphabet.letters().collect();
        if letters.is_empty() {
            return;
        }
        let fit = (fb.width() / KEY_W).max(1) as usize;
        let per_row = ((letters.len() + 1) / 2).min(fit).max(1);

        for (i, row) in letters.chunks(per_row).enumerate() {
            let y = top.saturating_add(i as u16);
            let row_w = (row.len() as u16).saturating_mul(KEY_W).saturating_sub(1);
            let mut x = fb.width().saturating_sub(row_w) / 2;
            for &ch in row {
                let style = self.key_style(snap, ch);
                fb.put_char(x, y, ' ', style);
                fb.put_char(x + 1, y, ch, style);
                fb.put_char(x + 2, y, ' ', style);
                x = x.saturating_add(KEY_W);
            }
        }
    }

    fn key_style(&self, snap: &GameSnapshot, ch: char) -> CellStyle {
        if !snap.is_guessed(ch) {
            return CellStyle::fg(INK).on(KEY_BG).bold();
        }
        if snap.target_word.contains(ch) {
            CellStyle::fg(KEY_HIT).dim()
        } else {
            CellStyle::fg(KEY_MISS).dim()
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, result: RoundResult, y: u16) {
        let lang = snap.language.code();
        let message = match result {
            RoundResult::Won => text(lang, TextKey::YouWin).to_string(),
            RoundResult::Lost => format!("{} {}", text(lang, TextKey::YouLost), snap.target_word),
        };
        fb.put_str_centered(y, &message, CellStyle::fg(MESSAGE).bold());

        let prompt = format!("[Enter] {}", text(lang, TextKey::TryNewWord));
        fb.put_str_centered(y.saturating_add(2), &prompt, CellStyle::fg(RESET).bold());
    }
}

/// Masked letters joined by single spaces.
fn masked_word(masked: &[char]) -> String {
    let mut out = String::with_capacity(masked.len() * 2);
    for (i, ch) in masked.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(*ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn default_band_fits_a_small_terminal() {
        let view = GameView::default();
        assert!(view.gallows_height() <= 16);
        assert!(view.band.width() <= 24);
    }

    #[test]
    fn no_mistakes_leaves_gallows_blank() {
        let view = GameView::default();
        let snap = GameState::with_word("CODE").snapshot(Language::English, true);
        let fb = view.render(&snap, Viewport::new(80, 24));
        for y in view.gallows_top()..view.gallows_top() + view.gallows_height() {
            assert!(fb.row_text(y).trim().is_empty(), "row {} not blank", y);
        }
    }

    #[test]
    fn first_mistake_draws_top_bar() {
        let view = GameView::default();
        let mut game = GameState::with_word("CODE");
        game.guess('Z');
        let fb = view.render(&game.snapshot(Language::English, true), Viewport::new(80, 24));
        assert!(fb.row_text(view.gallows_top()).contains("─────"));
    }

    #[test]
    fn masked_word_is_space_separated() {
        assert_eq!(masked_word(&['C', '_', '_']), "C _ _");
        assert_eq!(masked_word(&[]), "");
    }
}
