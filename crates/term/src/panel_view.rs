//! PanelView: maps an LED pixel grid into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Terminal glyphs are roughly twice as tall as they are wide, so each cell
//! shows two LED rows: the upper half block `▀` takes the upper pixel as its
//! foreground and the lower pixel as its background. A 32x32 panel becomes
//! 32 columns by 16 rows of square-looking pixels.

use crate::fb::{CellStyle, FrameBuffer};
use crate::types::Rgb;

/// Upper half block.
pub const HALF_BLOCK: char = '▀';

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

/// Layout settings for drawing a panel in the terminal.
#[derive(Debug, Clone, Copy)]
pub struct PanelView {
    border: bool,
    border_style: CellStyle,
}

impl Default for PanelView {
    fn default() -> Self {
        Self {
            border: true,
            border_style: CellStyle::new(Rgb::new(110, 110, 120), Rgb::BLACK),
        }
    }
}

impl PanelView {
    pub fn with_border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    /// Terminal cells occupied by a `panel_w` x `panel_h` panel, border
    /// included. Saturates at `u16::MAX`.
    pub fn frame_size(&self, panel_w: u16, panel_h: u16) -> (u16, u16) {
        let pad = if self.border { 2 } else { 0 };
        (
            panel_w.saturating_add(pad),
            panel_h.div_ceil(2).saturating_add(pad),
        )
    }

    pub fn render(&self, pixels: &[Rgb], panel_w: u16, panel_h: u16, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(pixels, panel_w, panel_h, viewport, &mut fb);
        fb
    }

    /// Render row-major `pixels` into an existing framebuffer, centered in
    /// `viewport`.
    ///
    /// Allocation-free once `fb` has the viewport's size.
    pub fn render_into(
        &self,
        pixels: &[Rgb],
        panel_w: u16,
        panel_h: u16,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(panel_w, panel_h);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        if self.border {
            draw_border(fb, start_x, start_y, frame_w, frame_h, self.border_style);
        }

        let inner = u16::from(self.border);
        let pixel = |x: u16, y: u16| -> Rgb {
            if y >= panel_h {
                return Rgb::BLACK;
            }
            let i = (y as usize) * (panel_w as usize) + (x as usize);
            pixels.get(i).copied().unwrap_or(Rgb::BLACK)
        };

        for row in 0..panel_h.div_ceil(2) {
            for x in 0..panel_w {
                let style = CellStyle::new(pixel(x, row * 2), pixel(x, row * 2 + 1));
                fb.put_char(
                    start_x.saturating_add(inner).saturating_add(x),
                    start_y.saturating_add(inner).saturating_add(row),
                    HALF_BLOCK,
                    style,
                );
            }
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    let right = x.saturating_add(w - 1);
    let bottom = y.saturating_add(h - 1);

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);

    // Only the part inside the framebuffer can be seen.
    for dx in 1..(w - 1).min(fb.width()) {
        fb.put_char(x.saturating_add(dx), y, '─', style);
        fb.put_char(x.saturating_add(dx), bottom, '─', style);
    }
    for dy in 1..(h - 1).min(fb.height()) {
        fb.put_char(x, y.saturating_add(dy), '│', style);
        fb.put_char(right, y.saturating_add(dy), '│', style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_packs_two_rows_per_cell() {
        let view = PanelView::default();
        assert_eq!(view.frame_size(32, 32), (34, 18));
        assert_eq!(view.frame_size(3, 3), (5, 4));
        assert_eq!(view.with_border(false).frame_size(32, 32), (32, 16));
    }

    #[test]
    fn frame_size_saturates_for_huge_panels() {
        let view = PanelView::default();
        assert_eq!(view.frame_size(u16::MAX, 32), (u16::MAX, 18));
        assert_eq!(view.frame_size(u16::MAX - 1, u16::MAX), (u16::MAX, 32770));
        assert_eq!(
            view.with_border(false).frame_size(u16::MAX, u16::MAX),
            (u16::MAX, 32768)
        );
    }

    #[test]
    fn wide_panel_is_clipped_to_viewport() {
        let green = Rgb::new(0, 200, 0);
        let pixels = vec![green; u16::MAX as usize];
        let fb = PanelView::default().render(&pixels, u16::MAX, 1, Viewport::new(80, 24));

        // Frame is 3 rows tall: start_y = (24 - 3) / 2 = 10.
        assert_eq!((fb.width(), fb.height()), (80, 24));
        assert_eq!(fb.get(0, 10).unwrap().ch, '┌');
        assert_eq!(fb.get(79, 10).unwrap().ch, '─');
        let cell = fb.get(1, 11).unwrap();
        assert_eq!(cell.ch, HALF_BLOCK);
        assert_eq!(cell.style, CellStyle::new(green, Rgb::BLACK));
    }

    #[test]
    fn odd_height_pads_last_row_with_black() {
        let red = Rgb::new(255, 0, 0);
        let pixels = [red; 3];
        let view = PanelView::default().with_border(false);
        let fb = view.render(&pixels, 1, 3, Viewport::new(1, 2));

        let last = fb.get(0, 1).unwrap();
        assert_eq!(last.ch, HALF_BLOCK);
        assert_eq!(last.style, CellStyle::new(red, Rgb::BLACK));
    }
}
