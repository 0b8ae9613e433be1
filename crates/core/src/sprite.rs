//! Sprite module - immutable indexed-color bitmap
//!
//! A sprite is a W x H grid of symbols stored as a flat row-major array.
//! Coordinates: (x, y) where x runs left to right and y top to bottom, origin
//! at the top-left cell.
//!
//! Symbols are resolved to colors through a [`Palette`]. The reserved
//! [`TRANSPARENT`] symbol short-circuits before any palette lookup, so
//! per-pixel drawing is a binary decision: paint an opaque color or skip.

use crate::error::{SpriteError, SpriteResult};
use crate::palette::Palette;
use crate::types::{Rgb, TRANSPARENT};

/// An opaque sprite cell resolved to its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub x: u16,
    pub y: u16,
    pub color: Rgb,
}

/// Fixed-size grid of palette symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: u16,
    height: u16,
    /// Flat array of symbols, row-major order (y * width + x)
    cells: Vec<char>,
}

impl Sprite {
    /// Build a sprite from literal rows.
    ///
    /// Every row must hold the same number of symbols as the first one.
    ///
    /// # Examples
    ///
    /// ```
    /// use led_sprite_core::Sprite;
    ///
    /// let sprite = Sprite::from_rows(&[".A.", "AAA"]).unwrap();
    /// assert_eq!((sprite.width(), sprite.height()), (3, 2));
    /// assert_eq!(sprite.symbol_at(1, 0), Ok('A'));
    /// assert!(Sprite::from_rows(&["AA", "A"]).is_err());
    /// ```
    pub fn from_rows(rows: &[&str]) -> SpriteResult<Self> {
        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            return Err(SpriteError::EmptySprite);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let before = cells.len();
            cells.extend(line.chars());
            let found = cells.len() - before;
            if found != width {
                return Err(SpriteError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
        }

        Ok(Self {
            width: u16::try_from(width).map_err(|_| SpriteError::TooLarge(width))?,
            height: u16::try_from(rows.len()).map_err(|_| SpriteError::TooLarge(rows.len()))?,
            cells,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Symbol at `(x, y)`.
    pub fn symbol_at(&self, x: u16, y: u16) -> SpriteResult<char> {
        if x >= self.width || y >= self.height {
            return Err(SpriteError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.cells[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Resolve a symbol through `palette`.
    ///
    /// Returns `Ok(None)` for the transparent marker without consulting the
    /// palette at all.
    #[inline]
    pub fn color_for(symbol: char, palette: &Palette) -> SpriteResult<Option<Rgb>> {
        if symbol == TRANSPARENT {
            return Ok(None);
        }
        palette
            .get(symbol)
            .map(Some)
            .ok_or(SpriteError::UnknownSymbol { symbol })
    }

    /// Check that every non-transparent symbol has a palette entry.
    ///
    /// Call once at startup; after it succeeds, [`Sprite::opaque_pixels`]
    /// never yields an error for the same palette.
    pub fn validate(&self, palette: &Palette) -> SpriteResult<()> {
        for &symbol in &self.cells {
            Self::color_for(symbol, palette)?;
        }
        Ok(())
    }

    /// Opaque cells in row-major order, resolved to colors.
    pub fn opaque_pixels<'a>(
        &'a self,
        palette: &'a Palette,
    ) -> impl Iterator<Item = SpriteResult<Pixel>> + 'a {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, &symbol)| match Self::color_for(symbol, palette) {
                Ok(Some(color)) => Some(Ok(Pixel {
                    x: (i % width) as u16,
                    y: (i / width) as u16,
                    color,
                })),
                Ok(None) => None,
                Err(e) => Some(Err(e)),
            })
    }

    /// Distinct symbols used by the grid, in first-seen order.
    pub fn symbols(&self) -> Vec<char> {
        let mut seen = Vec::new();
        for &symbol in &self.cells {
            if !seen.contains(&symbol) {
                seen.push(symbol);
            }
        }
        seen
    }

    /// Iterate rows as symbol slices.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width as usize)
    }
}
