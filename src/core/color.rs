//! Player color derivation
//!
//! Every peer gets a color derived from their multiplayer id, so the same
//! player keeps the same arrow color across sessions and across machines.

use serde::{Deserialize, Serialize};

use super::constants::COLOR_SEED_DIGITS;
use super::rng::Pcg32;
use super::types::PlayerId;

// =============================================================================
// COLOR
// =============================================================================

/// 8-bit RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to RGBA floats in the range [0.0, 1.0] for float-color
    /// renderers
    pub fn rgba_f32(self, alpha: f32) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            alpha,
        ]
    }
}

// =============================================================================
// PALETTES
// =============================================================================

/// Which slice of the RGB cube player colors are sampled from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorPalette {
    /// Bright colors, every component at least 120
    Pastel,
    /// Muted colors, every component below 150
    Dark,
    /// Plain black for every player
    Black,
    /// The full RGB cube
    #[default]
    All,
}

impl ColorPalette {
    /// Per-component sampling range `[min, max)`, or None for fixed colors
    fn component_range(self) -> Option<(u32, u32)> {
        match self {
            ColorPalette::Pastel => Some((120, 256)),
            ColorPalette::Dark => Some((0, 150)),
            ColorPalette::All => Some((0, 256)),
            ColorPalette::Black => None,
        }
    }
}

// =============================================================================
// DERIVATION
// =============================================================================

/// Color seed for a player: the first five decimal digits of their id,
/// or all of them when the id is shorter.
///
/// Ids sharing their leading digits share a color. Accepted trade-off for
/// a seed that survives id-format growth.
///
/// # Examples
///
/// ```
/// use player_arrows::core::color::color_seed;
/// use player_arrows::core::types::PlayerId;
///
/// assert_eq!(color_seed(PlayerId(76543210987654321)), 76543);
/// assert_eq!(color_seed(PlayerId(42)), 42);
/// ```
pub fn color_seed(id: PlayerId) -> u64 {
    let digits = id.0.to_string();
    let head = &digits[..digits.len().min(COLOR_SEED_DIGITS)];
    head.parse().unwrap_or(0)
}

/// Derive a player's arrow color.
///
/// Seeds a fresh generator from the id and samples R, G and B in that
/// order from the palette's component range. Fixed palettes return their
/// color without touching the generator.
pub fn player_color(id: PlayerId, palette: ColorPalette) -> Color {
    let Some((min, max)) = palette.component_range() else {
        return Color::BLACK;
    };

    let mut rng = Pcg32::new(color_seed(id));
    let r = rng.gen_range(min, max) as u8;
    let g = rng.gen_range(min, max) as u8;
    let b = rng.gen_range(min, max) as u8;
    Color::new(r, g, b)
}
