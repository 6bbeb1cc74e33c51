//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is flushed to the terminal through crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Turn the gallows draw commands into terminal cells ([`canvas`])
//! - Only rewrite the cells that changed between frames ([`renderer`])

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use hangman_tui_core as core;
pub use hangman_tui_types as types;

pub use canvas::{CanvasScale, CellBounds};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
