//! Engine constants - tick rates, geometry factors, color derivation
//!
//! All magic numbers the arrow engine relies on. Config defaults live in
//! the `config` module next to their serde default functions.

// =============================================================================
// TIMING
// =============================================================================

/// Host update ticks per second. Update-rate throttling is expressed as a
/// fraction of this base rate.
pub const BASE_TICK_RATE: u32 = 60;

// =============================================================================
// WORLD GEOMETRY
// =============================================================================

/// World pixels per map tile. Transition anchors are stored in tiles and
/// converted to pixels for bearing math.
pub const TILE_PIXELS: f32 = 64.0;

/// Fraction of the half-screen radius at which arrows sit. Keeps arrows
/// slightly inside the screen border instead of clipping at the edge.
pub const EDGE_INSET: f32 = 0.9;

/// Distance in screen pixels from an arrow's anchor back along its bearing
/// to the name label anchor. Covers the arrow sprite plus a small gap;
/// hosts with taller sprites can place labels themselves via
/// `geometry::label_pos`.
pub const LABEL_OFFSET: f32 = 48.0;

// =============================================================================
// COLOR DERIVATION
// =============================================================================

/// Number of leading decimal digits of a player id used as the color seed.
/// Truncation keeps the seed in a stable range across id formats.
pub const COLOR_SEED_DIGITS: usize = 5;
