//! Sprite model errors.

use thiserror::Error;

/// Result type alias for sprite model operations.
pub type SpriteResult<T> = Result<T, SpriteError>;

/// Everything that can go wrong while building or reading a sprite.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpriteError {
    /// A grid coordinate outside the sprite bounds.
    #[error("cell ({x}, {y}) is outside the {width}x{height} sprite")]
    OutOfRange {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },

    /// A non-transparent symbol with no palette entry.
    #[error("symbol '{symbol}' has no palette entry")]
    UnknownSymbol { symbol: char },

    /// A row whose length differs from the first row.
    #[error("row {row} has {found} symbols, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("sprite has no cells")]
    EmptySprite,

    /// Grid larger than the `u16` coordinate space.
    #[error("sprite dimension {0} exceeds {max}", max = u16::MAX)]
    TooLarge(usize),

    #[error("palette is full ({capacity} entries)")]
    PaletteFull { capacity: usize },
}
