//! The fixed sprite shown on the panel.
//!
//! Symbols:
//!
//! | Symbol | Color | RGB |
//! |--------|-------|-----|
//! | `G` | green tunic | (0, 168, 0) |
//! | `B` | brown outline | (136, 72, 0) |
//! | `S` | skin | (252, 188, 116) |
//! | `Y` | yellow trim | (248, 216, 0) |
//! | `.` | transparent | - |

use crate::error::SpriteResult;
use crate::palette::Palette;
use crate::sprite::Sprite;
use crate::types::Rgb;

/// Sprite rows, top to bottom.
pub const REFERENCE_ROWS: [&str; 16] = [
    "................",
    "................",
    "G....GGGGGG.....",
    "GG..GGGGGGGG....",
    ".GGGBYYYYYYBG...",
    "..GBSBSSSSBSBG..",
    "..GBSSSBBSSSSB..",
    "...BSSSSSSSSB...",
    "..BBBGSSSSGBBB..",
    ".BSSBGGGGGGBSSB.",
    ".BSSBGYYYYGBSSB.",
    "..BBGGGGGGGGBB..",
    "...BGGGGGGGGB...",
    "...BSSB..BSSB...",
    "..BBBBB..BBBBB..",
    "................",
];

pub const REFERENCE_PALETTE: [(char, Rgb); 4] = [
    ('G', Rgb::new(0, 168, 0)),
    ('B', Rgb::new(136, 72, 0)),
    ('S', Rgb::new(252, 188, 116)),
    ('Y', Rgb::new(248, 216, 0)),
];

pub fn reference_sprite() -> SpriteResult<Sprite> {
    Sprite::from_rows(&REFERENCE_ROWS)
}

pub fn reference_palette() -> SpriteResult<Palette> {
    Palette::from_entries(&REFERENCE_PALETTE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BACKGROUND, SPRITE_HEIGHT, SPRITE_WIDTH, TRANSPARENT};

    #[test]
    fn reference_sprite_is_16x16() {
        let sprite = reference_sprite().unwrap();
        assert_eq!(sprite.width(), SPRITE_WIDTH);
        assert_eq!(sprite.height(), SPRITE_HEIGHT);
    }

    #[test]
    fn reference_sprite_validates_against_palette() {
        let sprite = reference_sprite().unwrap();
        let palette = reference_palette().unwrap();
        assert!(sprite.validate(&palette).is_ok());
    }

    #[test]
    fn reference_symbols_are_gbsy() {
        let sprite = reference_sprite().unwrap();
        let mut opaque: Vec<char> = sprite
            .symbols()
            .into_iter()
            .filter(|&s| s != TRANSPARENT)
            .collect();
        opaque.sort_unstable();
        assert_eq!(opaque, vec!['B', 'G', 'S', 'Y']);
    }

    #[test]
    fn palette_colors_are_distinct_and_not_background() {
        let palette = reference_palette().unwrap();
        let colors: Vec<Rgb> = palette.iter().map(|(_, c)| c).collect();
        for (i, a) in colors.iter().enumerate() {
            assert_ne!(*a, BACKGROUND);
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
