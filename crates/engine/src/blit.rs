//! Sprite placement and pixel blit.

use crate::core::Pixel;
use crate::surface::Surface;
use crate::types::Rgb;

/// Surface coordinate of the sprite's top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const ORIGIN: Offset = Offset { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Offset that centers a `sprite_w` x `sprite_h` sprite on the surface.
///
/// Integer division truncates toward zero. A sprite larger than the surface
/// gets a negative offset and its overhanging edges are clipped by [`blit`].
///
/// # Examples
///
/// ```
/// use led_sprite_engine::{centering_offset, Offset};
///
/// assert_eq!(centering_offset(32, 32, 16, 16), Offset::new(8, 8));
/// assert_eq!(centering_offset(33, 32, 16, 16), Offset::new(8, 8));
/// assert_eq!(centering_offset(16, 16, 19, 16), Offset::new(-1, 0));
/// ```
pub fn centering_offset(surface_w: i32, surface_h: i32, sprite_w: u16, sprite_h: u16) -> Offset {
    Offset {
        x: (surface_w - i32::from(sprite_w)) / 2,
        y: (surface_h - i32::from(sprite_h)) / 2,
    }
}

/// Write `pixels` to `surface` shifted by `offset`.
///
/// Targets outside the surface are skipped before the write. Returns how many
/// pixels landed on the surface.
pub fn blit<S: Surface>(surface: &mut S, pixels: &[Pixel], offset: Offset) -> usize {
    let mut written = 0;
    for p in pixels {
        let x = offset.x + i32::from(p.x);
        let y = offset.y + i32::from(p.y);
        if surface.contains(x, y) {
            surface.set_pixel(x, y, p.color);
            written += 1;
        }
    }
    written
}

/// Clear to `background` then blit.
pub fn draw_frame<S: Surface>(
    surface: &mut S,
    pixels: &[Pixel],
    offset: Offset,
    background: Rgb,
) -> usize {
    surface.fill(background);
    blit(surface, pixels, offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    fn px(x: u16, y: u16, color: Rgb) -> Pixel {
        Pixel { x, y, color }
    }

    #[test]
    fn offset_truncates_odd_remainders() {
        assert_eq!(centering_offset(31, 31, 16, 16), Offset::new(7, 7));
        // Negative remainders truncate toward zero.
        assert_eq!(centering_offset(16, 16, 17, 17), Offset::new(0, 0));
        assert_eq!(centering_offset(16, 16, 19, 21), Offset::new(-1, -2));
    }

    #[test]
    fn blit_clips_negative_offsets() {
        let red = Rgb::new(255, 0, 0);
        let mut s = MemorySurface::new(2, 2);
        let pixels = [px(0, 0, red), px(1, 1, red), px(2, 2, red)];

        let written = blit(&mut s, &pixels, Offset::new(-1, -1));

        assert_eq!(written, 2);
        assert_eq!(s.pixel(0, 0), Some(red));
        assert_eq!(s.pixel(1, 1), Some(red));
        assert_eq!(s.pixel(1, 0), Some(Rgb::BLACK));
    }

    #[test]
    fn blit_clips_past_right_and_bottom() {
        let c = Rgb::new(1, 2, 3);
        let mut s = MemorySurface::new(4, 4);
        let pixels = [px(0, 0, c), px(1, 0, c), px(0, 1, c)];

        let written = blit(&mut s, &pixels, Offset::new(3, 3));

        assert_eq!(written, 1);
        assert_eq!(s.writes(), 1);
        assert_eq!(s.pixel(3, 3), Some(c));
    }

    #[test]
    fn draw_frame_clears_previous_content() {
        let c = Rgb::new(7, 7, 7);
        let mut s = MemorySurface::new(3, 3);
        s.fill(Rgb::new(200, 0, 0));

        draw_frame(&mut s, &[px(0, 0, c)], Offset::new(1, 1), Rgb::BLACK);

        let lit: Vec<usize> = s
            .pixels()
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p != Rgb::BLACK)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(lit, vec![4]);
    }
}
