//! TermSurface: the terminal as a [`Surface`] for the game engine.

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::canvas::Canvas;
use crate::fb::Rgb;
use crate::input::{read_ready, EventQueue};
use crate::renderer::TerminalRenderer;
use crate::types::{Anchor, FontRole, InputEvent, Rect, Surface, TextSurface};

pub struct TermSurface {
    canvas: Canvas,
    renderer: TerminalRenderer,
    events: EventQueue,
}

impl TermSurface {
    /// Take over the terminal for a `width` x `height` logical board.
    ///
    /// The terminal is restored by [`TermSurface::close`] or on drop.
    pub fn open(width: i32, height: i32) -> Result<Self> {
        let canvas = Canvas::new(width, height);
        let (need_cols, need_rows) = (canvas.framebuffer().width(), canvas.framebuffer().height());
        match crossterm::terminal::size() {
            Ok((cols, rows)) if cols < need_cols || rows < need_rows => {
                warn!(cols, rows, need_cols, need_rows, "terminal smaller than board, output will be clipped");
            }
            Ok(_) => {}
            Err(err) => warn!(%err, "could not query terminal size"),
        }

        let mut renderer = TerminalRenderer::new();
        renderer.enter().context("failed to acquire terminal")?;
        info!(width, height, "terminal surface opened");

        Ok(Self {
            canvas,
            renderer,
            events: EventQueue::new(),
        })
    }

    pub fn close(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

impl Surface for TermSurface {
    type Error = anyhow::Error;

    fn size(&self) -> (i32, i32) {
        self.canvas.size()
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.canvas.fill_rect(rect, color);
    }

    fn render_text(&mut self, text: &str, role: FontRole, color: Rgb) -> TextSurface {
        self.canvas.render_text(text, role, color)
    }

    fn blit_text(&mut self, text: &TextSurface, anchor: Anchor) {
        self.canvas.blit_text(text, anchor);
    }

    fn present(&mut self) -> Result<()> {
        self.events.end_frame();
        if self.events.take_resized() {
            // The terminal may have wiped or reflowed cells the diff thinks are current.
            debug!("terminal resized, full redraw");
            self.renderer.invalidate();
        }
        self.renderer
            .draw_swap(self.canvas.framebuffer_mut())
            .context("failed to draw frame")
    }

    fn poll_event(&mut self) -> Result<Option<InputEvent>> {
        self.events
            .poll_frame(read_ready)
            .context("failed to read terminal input")
    }
}
