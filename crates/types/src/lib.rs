//! Core types module - shared data structures and constants
//!
//! This crate defines the color type and the fixed dimensions shared by the
//! sprite model, the render loop and every display backend. It has no
//! dependencies, so it can be used from any context (core logic, terminal
//! preview, hardware panel).
//!
//! # Panel Dimensions
//!
//! A single 32x32 HUB75 panel is the reference target:
//!
//! - **Rows**: 32 (indexed 0-31)
//! - **Columns**: 32 (indexed 0-31)
//!
//! # Sprite Dimensions
//!
//! - **Width**: 16 columns
//! - **Height**: 16 rows
//!
//! Centering a 16x16 sprite on the 32x32 panel places its top-left corner at
//! (8, 8).
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_INTERVAL_MS` | 50 | Delay between frames (~20 FPS) |
//!
//! # Examples
//!
//! ```
//! use led_sprite_types::{Rgb, BACKGROUND, PANEL_COLS, SPRITE_WIDTH, TRANSPARENT};
//!
//! let green = Rgb::new(0, 168, 0);
//! assert_ne!(green, BACKGROUND);
//! assert_eq!(BACKGROUND, Rgb::BLACK);
//!
//! assert_eq!(TRANSPARENT, '.');
//! assert_eq!((PANEL_COLS - SPRITE_WIDTH) / 2, 8);
//! ```

/// Panel height in pixels (32 rows)
pub const PANEL_ROWS: u16 = 32;

/// Panel width in pixels (32 columns)
pub const PANEL_COLS: u16 = 32;

/// Sprite width in cells (16 columns)
pub const SPRITE_WIDTH: u16 = 16;

/// Sprite height in cells (16 rows)
pub const SPRITE_HEIGHT: u16 = 16;

/// Delay between frames in milliseconds (50ms ≈ 20 FPS)
pub const FRAME_INTERVAL_MS: u64 = 50;

/// Sprite symbol that is never drawn.
pub const TRANSPARENT: char = '.';

/// Color every frame is cleared to before the sprite is drawn.
pub const BACKGROUND: Rgb = Rgb::BLACK;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale all channels by `percent` (clamped to 0..=100).
    ///
    /// # Examples
    ///
    /// ```
    /// use led_sprite_types::Rgb;
    ///
    /// assert_eq!(Rgb::new(200, 100, 50).scaled(50), Rgb::new(100, 50, 25));
    /// assert_eq!(Rgb::new(200, 100, 50).scaled(150), Rgb::new(200, 100, 50));
    /// ```
    pub fn scaled(self, percent: u8) -> Self {
        let p = u16::from(percent.min(100));
        let scale = |c: u8| ((u16::from(c) * p) / 100) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}
