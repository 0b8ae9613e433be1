//! Palette module - symbol to color lookup
//!
//! A palette maps single-character sprite symbols to colors. Storage is a
//! fixed-capacity inline array, so building and querying a palette never
//! touches the heap. Lookups are a linear scan, which beats hashing for the
//! handful of entries a pixel-art sprite uses.

use arrayvec::ArrayVec;

use crate::error::{SpriteError, SpriteResult};
use crate::types::Rgb;

/// Maximum number of entries in a palette.
pub const PALETTE_CAPACITY: usize = 16;

/// Symbol to color lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: ArrayVec<(char, Rgb), PALETTE_CAPACITY>,
}

impl Palette {
    /// Create an empty palette
    pub fn new() -> Self {
        Self {
            entries: ArrayVec::new(),
        }
    }

    /// Build a palette from `(symbol, color)` pairs.
    ///
    /// Later entries replace earlier ones with the same symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use led_sprite_core::Palette;
    /// use led_sprite_core::types::Rgb;
    ///
    /// let palette = Palette::from_entries(&[('R', Rgb::new(255, 0, 0))]).unwrap();
    /// assert_eq!(palette.get('R'), Some(Rgb::new(255, 0, 0)));
    /// assert_eq!(palette.get('Q'), None);
    /// ```
    pub fn from_entries(entries: &[(char, Rgb)]) -> SpriteResult<Self> {
        let mut palette = Self::new();
        for &(symbol, color) in entries {
            palette.insert(symbol, color)?;
        }
        Ok(palette)
    }

    /// Add or replace the color for `symbol`.
    pub fn insert(&mut self, symbol: char, color: Rgb) -> SpriteResult<()> {
        if let Some(entry) = self.entries.iter_mut().find(|(s, _)| *s == symbol) {
            entry.1 = color;
            return Ok(());
        }
        self.entries
            .try_push((symbol, color))
            .map_err(|_| SpriteError::PaletteFull {
                capacity: PALETTE_CAPACITY,
            })
    }

    #[inline]
    pub fn get(&self, symbol: char) -> Option<Rgb> {
        self.entries
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|&(_, color)| color)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.get(symbol).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (char, Rgb)> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_existing_symbol() {
        let mut palette = Palette::new();
        palette.insert('A', Rgb::new(1, 1, 1)).unwrap();
        palette.insert('A', Rgb::new(2, 2, 2)).unwrap();

        assert_eq!(palette.len(), 1);
        assert_eq!(palette.get('A'), Some(Rgb::new(2, 2, 2)));
    }

    #[test]
    fn insert_past_capacity_fails() {
        let mut palette = Palette::new();
        for i in 0..PALETTE_CAPACITY {
            let symbol = char::from(b'a' + i as u8);
            palette.insert(symbol, Rgb::new(i as u8, 0, 0)).unwrap();
        }

        assert_eq!(
            palette.insert('Z', Rgb::BLACK),
            Err(SpriteError::PaletteFull {
                capacity: PALETTE_CAPACITY
            })
        );
        // Replacing still works when full.
        assert!(palette.insert('a', Rgb::BLACK).is_ok());
    }

    #[test]
    fn iter_preserves_insertion_order() {
        let palette = Palette::from_entries(&[
            ('X', Rgb::new(1, 0, 0)),
            ('A', Rgb::new(0, 1, 0)),
            ('M', Rgb::new(0, 0, 1)),
        ])
        .unwrap();

        let symbols: Vec<char> = palette.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec!['X', 'A', 'M']);
    }

    #[test]
    fn empty_palette() {
        let palette = Palette::default();
        assert!(palette.is_empty());
        assert!(!palette.contains('G'));
    }
}
