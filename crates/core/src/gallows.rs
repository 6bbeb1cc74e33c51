//! Gallows renderer - incorrect-guess count to draw commands
//!
//! The drawing is a static table of ten parts. Part `i` (0-based) is shown
//! once more than `i` incorrect guesses have been made, so the figure is
//! revealed one stroke per mistake and the full drawing appears at ten.
//!
//! All geometry is expressed as offsets from an anchor: the horizontal center
//! of the canvas and a baseline [`BASELINE_INSET`] units above its bottom edge.
//!
//! # Example
//!
//! ```
//! use hangman_tui_core::gallows::{render, DrawCommand};
//! use hangman_tui_core::types::Size;
//!
//! let cmds = render(3, Size::default());
//! assert_eq!(cmds.len(), 3);
//! assert!(matches!(cmds[2], DrawCommand::Ellipse { .. }));
//! ```

use crate::types::{Point, Rect, Size, BASELINE_INSET, STROKE_WIDTH};

/// Named parts of the drawing, in reveal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    TopBar,
    Post,
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
    LeftEye,
    RightEye,
}

/// Anchor-relative geometry: `x` from center, `y` from baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Shape {
    Line { from: (f32, f32), to: (f32, f32) },
    Ellipse { x: f32, y: f32, w: f32, h: f32 },
}

/// Stroke shared by every command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    /// RGB, black.
    pub color: (u8, u8, u8),
}

pub const STROKE: Stroke = Stroke {
    width: STROKE_WIDTH,
    color: (0, 0, 0),
};

/// A single stroked primitive in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Line { from: Point, to: Point },
    Ellipse { rect: Rect },
}

impl DrawCommand {
    pub fn stroke(&self) -> Stroke {
        STROKE
    }
}

/// Number of parts in the full drawing.
pub const PART_COUNT: usize = 10;

/// `(threshold, part, shape)`: shown when `incorrect_count > threshold`.
static GALLOWS: [(u32, Part, Shape); PART_COUNT] = [
    (
        0,
        Part::TopBar,
        Shape::Line {
            from: (-50.0, -200.0),
            to: (50.0, -200.0),
        },
    ),
    (
        1,
        Part::Post,
        Shape::Line {
            from: (0.0, -200.0),
            to: (0.0, -150.0),
        },
    ),
    (
        2,
        Part::Head,
        Shape::Ellipse {
            x: -20.0,
            y: -150.0,
            w: 40.0,
            h: 40.0,
        },
    ),
    (
        3,
        Part::Body,
        Shape::Line {
            from: (0.0, -110.0),
            to: (0.0, -50.0),
        },
    ),
    (
        4,
        Part::LeftArm,
        Shape::Line {
            from: (0.0, -100.0),
            to: (-30.0, -80.0),
        },
    ),
    (
        5,
        Part::RightArm,
        Shape::Line {
            from: (0.0, -100.0),
            to: (30.0, -80.0),
        },
    ),
    (
        6,
        Part::LeftLeg,
        Shape::Line {
            from: (0.0, -50.0),
            to: (-30.0, -20.0),
        },
    ),
    (
        7,
        Part::RightLeg,
        Shape::Line {
            from: (0.0, -50.0),
            to: (30.0, -20.0),
        },
    ),
    (
        8,
        Part::LeftEye,
        Shape::Line {
            from: (-20.0, -190.0),
            to: (-10.0, -180.0),
        },
    ),
    (
        9,
        Part::RightEye,
        Shape::Line {
            from: (20.0, -190.0),
            to: (10.0, -180.0),
        },
    ),
];

fn place(shape: Shape, canvas: Size) -> DrawCommand {
    let cx = canvas.width / 2.0;
    let base = canvas.height - BASELINE_INSET;
    match shape {
        Shape::Line { from, to } => DrawCommand::Line {
            from: Point::new(cx + from.0, base + from.1),
            to: Point::new(cx + to.0, base + to.1),
        },
        Shape::Ellipse { x, y, w, h } => DrawCommand::Ellipse {
            rect: Rect::new(cx + x, base + y, w, h),
        },
    }
}

/// Parts visible after `incorrect_count` mistakes, in reveal order.
pub fn visible_parts(incorrect_count: u32) -> impl Iterator<Item = Part> {
    GALLOWS
        .iter()
        .filter(move |(threshold, _, _)| incorrect_count > *threshold)
        .map(|(_, part, _)| *part)
}

/// Draw commands for `incorrect_count` mistakes on a `canvas`-sized surface.
pub fn render(incorrect_count: u32, canvas: Size) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(PART_COUNT);
    render_into(incorrect_count, canvas, &mut out);
    out
}

/// Allocation-free variant of [`render`]: clears `out` and fills it.
pub fn render_into(incorrect_count: u32, canvas: Size, out: &mut Vec<DrawCommand>) {
    out.clear();
    out.extend(
        GALLOWS
            .iter()
            .filter(|(threshold, _, _)| incorrect_count > *threshold)
            .map(|(_, _, shape)| place(*shape, canvas)),
    );
}
