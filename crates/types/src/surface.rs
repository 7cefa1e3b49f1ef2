//! Drawing and timing contract between the game and its display backend.
//!
//! The engine never talks to a terminal or window directly. It asks a
//! [`Surface`] for primitive operations and a [`FrameClock`] for pacing, which
//! keeps the tick logic testable with in-memory fakes.

use crate::{FontRole, InputEvent, Rgb};

/// Axis-aligned rectangle in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Placement point for rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// `(x, y)` is the middle of the text's top edge
    MidTop(i32, i32),
    /// `(x, y)` is the top-left corner
    TopLeft(i32, i32),
}

/// A piece of text rendered by the backend, with its measured size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSurface {
    pub text: String,
    pub role: FontRole,
    pub color: Rgb,
    pub width: i32,
    pub height: i32,
}

impl TextSurface {
    /// Bounding box once placed at `anchor`.
    pub fn rect_at(&self, anchor: Anchor) -> Rect {
        match anchor {
            Anchor::MidTop(x, y) => Rect::new(x - self.width / 2, y, self.width, self.height),
            Anchor::TopLeft(x, y) => Rect::new(x, y, self.width, self.height),
        }
    }
}

/// A fixed-size drawable target that also owns the input event queue.
pub trait Surface {
    type Error;

    /// Logical `(width, height)`.
    fn size(&self) -> (i32, i32);

    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Fill the whole surface.
    fn fill(&mut self, color: Rgb) {
        let (w, h) = self.size();
        self.fill_rect(Rect::new(0, 0, w, h), color);
    }

    /// Rasterise `text` and report its size. Nothing is drawn until
    /// [`Surface::blit_text`].
    fn render_text(&mut self, text: &str, role: FontRole, color: Rgb) -> TextSurface;

    fn blit_text(&mut self, text: &TextSurface, anchor: Anchor);

    /// Make everything drawn since the last call visible.
    fn present(&mut self) -> Result<(), Self::Error>;

    /// Next queued input event, or `None` once the queue is drained.
    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}

/// Paces the loop to a target rate.
pub trait FrameClock {
    /// Block until `1 / ticks_per_second` has passed since the previous call.
    fn tick(&mut self, ticks_per_second: u32);
}
