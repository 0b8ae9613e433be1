//! TerminalSurface: a [`Surface`] that previews the LED panel in a terminal.

use std::io::{self, IsTerminal, Write};

use anyhow::Context;
use log::debug;

use crate::engine::{Surface, SurfaceError};
use crate::fb::FrameBuffer;
use crate::panel_view::{PanelView, Viewport};
use crate::renderer::TerminalRenderer;
use crate::types::Rgb;

/// Emulated LED panel drawn with 24-bit color half blocks.
///
/// Pixels are written into a plain buffer; `submit` lays them out with
/// [`PanelView`] and sends the changed cells to the terminal. The terminal is
/// restored when the surface is dropped.
pub struct TerminalSurface<W: Write = io::Stdout> {
    width: u16,
    height: u16,
    pixels: Vec<Rgb>,
    view: PanelView,
    fb: FrameBuffer,
    viewport: Viewport,
    brightness: u8,
    follow_terminal_size: bool,
    renderer: TerminalRenderer<W>,
}

impl TerminalSurface<io::Stdout> {
    /// Take over stdout (alternate screen, hidden cursor) for a
    /// `width` x `height` panel.
    pub fn open(width: u16, height: u16) -> Result<Self, SurfaceError> {
        if !io::stdout().is_terminal() {
            return Err(SurfaceError::init("stdout is not a terminal"));
        }
        let (cols, rows) = crossterm::terminal::size()
            .context("failed to query terminal size")
            .map_err(SurfaceError::init)?;

        let mut renderer = TerminalRenderer::new();
        renderer
            .enter()
            .context("failed to enter alternate screen")
            .map_err(SurfaceError::init)?;
        debug!("terminal surface {width}x{height} in a {cols}x{rows} terminal");

        let mut surface = Self::from_renderer(renderer, width, height, Viewport::new(cols, rows));
        surface.follow_terminal_size = true;
        Ok(surface)
    }
}

impl<W: Write> TerminalSurface<W> {
    /// Render to an arbitrary writer with a fixed viewport.
    ///
    /// Nothing is written until the first `submit`.
    pub fn with_writer(out: W, width: u16, height: u16, viewport: Viewport) -> Self {
        Self::from_renderer(TerminalRenderer::with_writer(out), width, height, viewport)
    }

    fn from_renderer(renderer: TerminalRenderer<W>, width: u16, height: u16, viewport: Viewport) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; (width as usize) * (height as usize)],
            view: PanelView::default(),
            fb: FrameBuffer::new(viewport.width, viewport.height),
            viewport,
            brightness: 100,
            follow_terminal_size: false,
            renderer,
        }
    }

    pub fn with_view(mut self, view: PanelView) -> Self {
        self.view = view;
        self
    }

    /// Dim every pixel to `percent` of its color, like the panel's
    /// brightness setting.
    pub fn with_brightness(mut self, percent: u8) -> Self {
        self.brightness = percent.min(100);
        self
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn writer(&self) -> &W {
        self.renderer.writer()
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    fn present(&mut self) -> anyhow::Result<()> {
        if self.follow_terminal_size {
            if let Ok((cols, rows)) = crossterm::terminal::size() {
                self.viewport = Viewport::new(cols, rows);
            }
        }
        self.view
            .render_into(&self.pixels, self.width, self.height, self.viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn width(&self) -> i32 {
        i32::from(self.width)
    }

    fn height(&self) -> i32 {
        i32::from(self.height)
    }

    fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color.scaled(self.brightness));
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color.scaled(self.brightness);
        }
    }

    fn submit(mut self) -> Result<Self, SurfaceError> {
        self.present().map_err(SurfaceError::submit)?;
        Ok(self)
    }
}

impl<W: Write> Drop for TerminalSurface<W> {
    fn drop(&mut self) {
        if self.follow_terminal_size {
            let _ = self.renderer.exit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_stay_buffered_until_submit() {
        let mut s = TerminalSurface::with_writer(Vec::new(), 4, 4, Viewport::new(8, 4));
        s.set_pixel(1, 1, Rgb::new(255, 0, 0));
        assert!(s.writer().is_empty());

        let s = s.submit().unwrap();
        assert!(!s.writer().is_empty());
        assert_eq!(s.pixels()[4 + 1], Rgb::new(255, 0, 0));
    }

    #[test]
    fn borderless_view_draws_only_half_blocks() {
        let mut s = TerminalSurface::with_writer(Vec::new(), 2, 2, Viewport::new(2, 1))
            .with_view(PanelView::default().with_border(false));
        s.fill(Rgb::new(0, 0, 200));

        let s = s.submit().unwrap();
        let out = String::from_utf8_lossy(s.writer());
        assert!(out.contains(crate::panel_view::HALF_BLOCK));
        assert!(!out.contains('┌'));
    }

    #[test]
    fn brightness_dims_written_pixels() {
        let mut s = TerminalSurface::with_writer(Vec::new(), 2, 1, Viewport::new(4, 3))
            .with_brightness(50);
        s.fill(Rgb::new(100, 100, 100));
        s.set_pixel(1, 0, Rgb::new(200, 0, 0));
        assert_eq!(s.pixels(), &[Rgb::new(50, 50, 50), Rgb::new(100, 0, 0)]);
    }

    #[test]
    fn out_of_bounds_pixels_are_dropped() {
        let mut s = TerminalSurface::with_writer(Vec::new(), 2, 2, Viewport::new(4, 3));
        s.set_pixel(2, 0, Rgb::new(1, 1, 1));
        s.set_pixel(-1, 1, Rgb::new(1, 1, 1));
        assert!(s.pixels().iter().all(|&p| p == Rgb::BLACK));
    }
}
