//! Rasterizes gallows draw commands into framebuffer cells.
//!
//! Canvas units are mapped to cells with a fixed scale (a terminal cell is
//! roughly twice as tall as it is wide, so rows cover more canvas units than
//! columns). Lines pick a box-drawing glyph from their slope in cell space;
//! ellipses are sampled around their perimeter.

use crate::core::DrawCommand;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::Point;

/// Canvas units covered by one terminal column.
pub const DEFAULT_PX_PER_COL: f32 = 5.0;

/// Canvas units covered by one terminal row.
pub const DEFAULT_PX_PER_ROW: f32 = 12.5;

const ELLIPSE_SAMPLES: u32 = 48;

/// Cell-space bounding box (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBounds {
    pub min_col: i32,
    pub min_row: i32,
    pub max_col: i32,
    pub max_row: i32,
}

impl CellBounds {
    pub fn width(&self) -> u16 {
        (self.max_col - self.min_col + 1).max(0) as u16
    }

    pub fn height(&self) -> u16 {
        (self.max_row - self.min_row + 1).max(0) as u16
    }

    fn include(&mut self, (col, row): (i32, i32)) {
        self.min_col = self.min_col.min(col);
        self.min_row = self.min_row.min(row);
        self.max_col = self.max_col.max(col);
        self.max_row = self.max_row.max(row);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasScale {
    pub px_per_col: f32,
    pub px_per_row: f32,
}

impl Default for CanvasScale {
    fn default() -> Self {
        Self {
            px_per_col: DEFAULT_PX_PER_COL,
            px_per_row: DEFAULT_PX_PER_ROW,
        }
    }
}

impl CanvasScale {
    pub fn new(px_per_col: f32, px_per_row: f32) -> Self {
        Self {
            px_per_col: px_per_col.max(f32::EPSILON),
            px_per_row: px_per_row.max(f32::EPSILON),
        }
    }

    /// Cell containing canvas point `p`.
    pub fn cell_of(&self, p: Point) -> (i32, i32) {
        (
            (p.x / self.px_per_col).floor() as i32,
            (p.y / self.px_per_row).floor() as i32,
        )
    }

    /// Every cell touched by `cmd`, paired with the glyph to draw there.
    pub fn trace(&self, cmd: &DrawCommand, mut f: impl FnMut(i32, i32, char)) {
        match *cmd {
            DrawCommand::Line { from, to } => {
                let dc = (to.x - from.x) / self.px_per_col;
                let dr = (to.y - from.y) / self.px_per_row;
                let glyph = line_glyph(dc, dr);
                let steps = dc.abs().max(dr.abs()).ceil().max(1.0) as u32;
                for i in 0..=steps {
                    let t = i as f32 / steps as f32;
                    let p = Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
                    let (col, row) = self.cell_of(p);
                    f(col, row, glyph);
                }
            }
            DrawCommand::Ellipse { rect } => {
                let c = rect.center();
                let rx = rect.width / 2.0;
                let ry = rect.height / 2.0;
                for i in 0..ELLIPSE_SAMPLES {
                    let theta = (i as f32 / ELLIPSE_SAMPLES as f32) * std::f32::consts::TAU;
                    let p = Point::new(c.x + rx * theta.cos(), c.y + ry * theta.sin());
                    let (col, row) = self.cell_of(p);
                    f(col, row, 'o');
                }
            }
        }
    }

    /// Bounding box of all cells touched by `cmds`.
    pub fn bounds(&self, cmds: &[DrawCommand]) -> Option<CellBounds> {
        let mut out: Option<CellBounds> = None;
        for cmd in cmds {
            self.trace(cmd, |col, row, _| {
                out = Some(match out {
                    Some(mut b) => {
                        b.include((col, row));
                        b
                    }
                    None => CellBounds {
                        min_col: col,
                        min_row: row,
                        max_col: col,
                        max_row: row,
                    },
                });
            });
        }
        out
    }

    /// Draw `cmds` with canvas cell `(0, 0)` placed at framebuffer `(origin_x, origin_y)`.
    ///
    /// Cells falling outside the framebuffer are skipped; later commands
    /// overwrite earlier ones.
    pub fn rasterize(
        &self,
        fb: &mut FrameBuffer,
        cmds: &[DrawCommand],
        origin_x: i32,
        origin_y: i32,
        style: CellStyle,
    ) {
        for cmd in cmds {
            let style = if cmd.stroke().width >= 2.0 {
                style.bold()
            } else {
                style
            };
            self.trace(cmd, |col, row, glyph| {
                let x = origin_x + col;
                let y = origin_y + row;
                if x >= 0 && y >= 0 && x <= u16::MAX as i32 && y <= u16::MAX as i32 {
                    fb.put_char(x as u16, y as u16, glyph, style);
                }
            });
        }
    }
}

/// Glyph for a line spanning `dc` columns and `dr` rows (rows grow downward).
fn line_glyph(dc: f32, dr: f32) -> char {
    let (ac, ar) = (dc.abs(), dr.abs());
    if ar * 2.0 <= ac {
        '─'
    } else if ac * 2.0 <= ar {
        '│'
    } else if (dc > 0.0) == (dr > 0.0) {
        '\\'
    } else {
        '/'
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;

    #[test]
    fn glyph_follows_slope() {
        assert_eq!(line_glyph(10.0, 0.0), '─');
        assert_eq!(line_glyph(0.0, 5.0), '│');
        assert_eq!(line_glyph(-6.0, 3.0), '/');
        assert_eq!(line_glyph(6.0, 3.0), '\\');
    }

    #[test]
    fn horizontal_line_covers_every_column() {
        let scale = CanvasScale::new(5.0, 10.0);
        let cmd = DrawCommand::Line {
            from: Point::new(0.0, 0.0),
            to: Point::new(20.0, 0.0),
        };
        let mut fb = FrameBuffer::new(6, 1);
        scale.rasterize(&mut fb, &[cmd], 0, 0, CellStyle::default());
        assert_eq!(fb.row_text(0), "───── ");
    }

    #[test]
    fn ellipse_bounds_match_rect() {
        let scale = CanvasScale::new(5.0, 10.0);
        let cmd = DrawCommand::Ellipse {
            rect: Rect::new(10.0, 10.0, 40.0, 40.0),
        };
        let b = scale.bounds(&[cmd]).unwrap();
        assert_eq!((b.min_col, b.min_row), (2, 1));
        assert_eq!((b.max_col, b.max_row), (10, 5));
    }

    #[test]
    fn negative_origin_clips() {
        let scale = CanvasScale::default();
        let cmd = DrawCommand::Line {
            from: Point::new(0.0, 0.0),
            to: Point::new(0.0, 50.0),
        };
        let mut fb = FrameBuffer::new(1, 2);
        scale.rasterize(&mut fb, &[cmd], 0, -4, CellStyle::default());
        assert_eq!(fb.text(), "│\n \n");
    }

    #[test]
    fn empty_commands_have_no_bounds() {
        assert_eq!(CanvasScale::default().bounds(&[]), None);
    }
}
