//! Sprite model - pure, immutable, and testable
//!
//! This crate holds the indexed-color bitmap and its palette. It has **no
//! dependencies** on terminals, GPIO, or timing, so it can be exercised in
//! unit tests without any display attached.
//!
//! # Module Structure
//!
//! - [`sprite`]: W x H symbol grid with bounds-checked access
//! - [`palette`]: fixed-capacity symbol to color table
//! - [`reference`]: the compiled-in 16x16 sprite and its four-color palette
//! - [`error`]: [`SpriteError`] and the [`SpriteResult`] alias
//!
//! # Transparency
//!
//! Transparency is a grid-level sentinel (`'.'`), not a color channel. A
//! transparent cell resolves to `None` without a palette lookup, so drawing
//! never blends: a cell is either painted with an opaque color or skipped.
//!
//! # Example
//!
//! ```
//! use led_sprite_core::{reference_palette, reference_sprite, Sprite};
//!
//! let sprite = reference_sprite().unwrap();
//! let palette = reference_palette().unwrap();
//! sprite.validate(&palette).unwrap();
//!
//! // Row 2 starts with an opaque 'G'.
//! let symbol = sprite.symbol_at(0, 2).unwrap();
//! assert_eq!(symbol, 'G');
//! assert!(Sprite::color_for(symbol, &palette).unwrap().is_some());
//!
//! // The top-left cell is transparent.
//! assert_eq!(Sprite::color_for(sprite.symbol_at(0, 0).unwrap(), &palette), Ok(None));
//! ```

pub mod error;
pub mod palette;
pub mod reference;
pub mod sprite;

pub use led_sprite_types as types;

// Re-export commonly used types for convenience
pub use error::{SpriteError, SpriteResult};
pub use palette::{Palette, PALETTE_CAPACITY};
pub use reference::{reference_palette, reference_sprite, REFERENCE_PALETTE, REFERENCE_ROWS};
pub use sprite::{Pixel, Sprite};
