//! Display surface capability and an in-memory implementation.
//!
//! A [`Surface`] is the only thing the render loop knows about the display:
//! a fixed-size pixel buffer it can fill, write single pixels into, and
//! submit. `submit` consumes the surface and hands back the next writable
//! one, so backends that physically swap buffers (an LED matrix canvas, a
//! terminal diff renderer) fit the same signature as ones that don't.

use crate::error::SurfaceError;
use crate::types::Rgb;

/// Pixel target the render loop draws into.
pub trait Surface: Sized {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    /// Overwrite every pixel with `color`.
    fn fill(&mut self, color: Rgb);

    /// Write one pixel. Coordinates outside the surface are ignored.
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb);

    /// Present everything written since the last submit.
    ///
    /// Writes are not guaranteed visible until this returns. The returned
    /// surface is the one to draw the next frame into.
    fn submit(self) -> Result<Self, SurfaceError>;

    #[inline]
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width() && y < self.height()
    }
}

/// Double-buffered in-memory surface.
///
/// Drawing goes into a back buffer; `submit` swaps it with the front buffer,
/// so the next frame starts from whatever was presented two submits ago.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySurface {
    width: u16,
    height: u16,
    back: Vec<Rgb>,
    front: Vec<Rgb>,
    submits: u64,
    writes: u64,
}

impl MemorySurface {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            back: vec![Rgb::BLACK; len],
            front: vec![Rgb::BLACK; len],
            submits: 0,
            writes: 0,
        }
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Pixel in the buffer currently being drawn.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.back[i])
    }

    /// Pixel in the most recently submitted frame.
    pub fn presented_pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.front[i])
    }

    /// The buffer currently being drawn, row-major.
    pub fn pixels(&self) -> &[Rgb] {
        &self.back
    }

    /// The most recently submitted frame, row-major.
    pub fn presented(&self) -> &[Rgb] {
        &self.front
    }

    /// Number of frames submitted so far.
    pub fn submits(&self) -> u64 {
        self.submits
    }

    /// Number of in-bounds `set_pixel` calls so far.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl Surface for MemorySurface {
    fn width(&self) -> i32 {
        i32::from(self.width)
    }

    fn height(&self) -> i32 {
        i32::from(self.height)
    }

    fn fill(&mut self, color: Rgb) {
        self.back.fill(color);
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.back[i] = color;
            self.writes += 1;
        }
    }

    fn submit(mut self) -> Result<Self, SurfaceError> {
        std::mem::swap(&mut self.back, &mut self.front);
        self.submits += 1;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut s = MemorySurface::new(4, 3);
        let red = Rgb::new(255, 0, 0);
        s.set_pixel(-1, 0, red);
        s.set_pixel(4, 0, red);
        s.set_pixel(0, 3, red);
        s.set_pixel(0, -5, red);

        assert_eq!(s.writes(), 0);
        assert!(s.pixels().iter().all(|&p| p == Rgb::BLACK));
    }

    #[test]
    fn set_and_get_pixel() {
        let mut s = MemorySurface::new(4, 3);
        s.set_pixel(3, 2, Rgb::new(1, 2, 3));
        assert_eq!(s.pixel(3, 2), Some(Rgb::new(1, 2, 3)));
        assert_eq!(s.pixels()[2 * 4 + 3], Rgb::new(1, 2, 3));
        assert_eq!(s.pixel(4, 2), None);
    }

    #[test]
    fn submit_swaps_buffers() {
        let mut s = MemorySurface::new(2, 2);
        let white = Rgb::new(255, 255, 255);
        s.fill(white);

        let s = s.submit().unwrap();
        assert_eq!(s.submits(), 1);
        assert!(s.presented().iter().all(|&p| p == white));
        assert_eq!(s.presented_pixel(1, 1), Some(white));
        assert_eq!(s.presented_pixel(2, 0), None);
        // The new back buffer is the old (black) front buffer.
        assert!(s.pixels().iter().all(|&p| p == Rgb::BLACK));
    }

    #[test]
    fn fill_twice_equals_fill_once() {
        let mut once = MemorySurface::new(3, 3);
        once.set_pixel(1, 1, Rgb::new(9, 9, 9));
        once.fill(Rgb::BLACK);

        let mut twice = MemorySurface::new(3, 3);
        twice.set_pixel(1, 1, Rgb::new(9, 9, 9));
        twice.fill(Rgb::BLACK);
        twice.fill(Rgb::BLACK);

        assert_eq!(once.pixels(), twice.pixels());
    }

    #[test]
    fn contains_edges() {
        let s = MemorySurface::new(32, 32);
        assert!(s.contains(0, 0));
        assert!(s.contains(31, 31));
        assert!(!s.contains(32, 0));
        assert!(!s.contains(0, -1));
    }
}
