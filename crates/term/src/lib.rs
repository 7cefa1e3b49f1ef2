//! Terminal display backend.
//!
//! Implements the game's drawing contract on a plain terminal. Logical drawing
//! is rasterised into a framebuffer of styled characters which is flushed with
//! crossterm, rewriting only the cells that changed since the previous frame.
//!
//! - [`Canvas`]: logical rects and text onto the framebuffer (pure, testable)
//! - [`TerminalRenderer`]: raw mode, alternate screen and diff flushing
//! - [`TermSurface`]: the [`Surface`](types::Surface) the engine draws on
//! - [`TickLimiter`]: the [`FrameClock`](types::FrameClock) pacing each tick

pub mod canvas;
pub mod clock;
pub mod fb;
pub mod renderer;
pub mod surface;

pub use snake_eater_input as input;
pub use snake_eater_types as types;

pub use canvas::{Canvas, UNITS_PER_COLUMN, UNITS_PER_ROW};
pub use clock::TickLimiter;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{
    encode_diff_into, encode_full_into, encode_restore_into, install_panic_hook, TerminalRenderer,
};
pub use surface::TermSurface;
