//! Canvas: rasterises logical-unit drawing onto a character framebuffer.
//!
//! One terminal column covers 5 logical units and one row covers 10, so a
//! 10x10 grid cell becomes a 2x1 block of characters, which roughly squares
//! it up on a typical terminal font.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Anchor, FontRole, Rect, TextSurface};

/// Logical units per terminal column.
pub const UNITS_PER_COLUMN: i32 = 5;

/// Logical units per terminal row.
pub const UNITS_PER_ROW: i32 = 10;

#[derive(Debug, Clone)]
pub struct Canvas {
    width: i32,
    height: i32,
    fb: FrameBuffer,
}

impl Canvas {
    pub fn new(width: i32, height: i32) -> Self {
        let cols = (width / UNITS_PER_COLUMN).clamp(0, u16::MAX as i32) as u16;
        let rows = (height / UNITS_PER_ROW).clamp(0, u16::MAX as i32) as u16;
        Self {
            width,
            height,
            fb: FrameBuffer::new(cols, rows),
        }
    }

    /// Logical `(width, height)`.
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    /// Paint every cell the rectangle touches. Parts outside the board are clipped.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let cols = self.fb.width() as i32;
        let rows = self.fb.height() as i32;

        let c0 = rect.x.div_euclid(UNITS_PER_COLUMN).max(0);
        let c1 = ceil_div(rect.x + rect.w, UNITS_PER_COLUMN).min(cols);
        let r0 = rect.y.div_euclid(UNITS_PER_ROW).max(0);
        let r1 = ceil_div(rect.y + rect.h, UNITS_PER_ROW).min(rows);
        if c0 >= c1 || r0 >= r1 {
            return;
        }

        let style = CellStyle {
            fg: color,
            bg: color,
            bold: false,
        };
        self.fb.fill_rect(
            c0 as u16,
            r0 as u16,
            (c1 - c0) as u16,
            (r1 - r0) as u16,
            ' ',
            style,
        );
    }

    /// Measure `text` as it will be drawn for `role`.
    pub fn render_text(&self, text: &str, role: FontRole, color: Rgb) -> TextSurface {
        let glyphs = glyphs_for(text, role).count() as i32;
        TextSurface {
            text: text.to_string(),
            role,
            color,
            width: glyphs * UNITS_PER_COLUMN,
            height: UNITS_PER_ROW,
        }
    }

    /// Draw previously measured text at `anchor`, keeping cell backgrounds.
    pub fn blit_text(&mut self, text: &TextSurface, anchor: Anchor) {
        let rect = text.rect_at(anchor);
        let row = rect.y.div_euclid(UNITS_PER_ROW);
        if row < 0 || row >= self.fb.height() as i32 {
            return;
        }
        let col0 = rect.x.div_euclid(UNITS_PER_COLUMN);
        let bold = matches!(text.role, FontRole::Title);

        for (i, ch) in glyphs_for(&text.text, text.role).enumerate() {
            let col = col0 + i as i32;
            if col < 0 {
                continue;
            }
            if col >= self.fb.width() as i32 {
                break;
            }
            self.fb.overlay_char(col as u16, row as u16, ch, text.color, bold);
        }
    }
}

/// Title text is letter-spaced to stand out; other roles are drawn as-is.
fn glyphs_for(text: &str, role: FontRole) -> impl Iterator<Item = char> + '_ {
    let spaced = matches!(role, FontRole::Title);
    let last = text.chars().count().saturating_sub(1);
    text.chars().enumerate().flat_map(move |(i, ch)| {
        let gap = (spaced && i < last).then_some(' ');
        std::iter::once(ch).chain(gap)
    })
}

fn ceil_div(a: i32, b: i32) -> i32 {
    -((-a).div_euclid(b))
}
