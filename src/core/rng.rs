//! Deterministic random number generation for color derivation
//!
//! A small PCG-XSH-RR generator (32-bit output from 64-bit state). Player
//! colors must survive sessions and dependency upgrades, so the generator
//! is written out here instead of pulling in a crate whose stream could
//! change between versions.

// =============================================================================
// PCG-XSH-RR
// =============================================================================

/// PCG multiplier constant
const MULTIPLIER: u64 = 6364136223846793005;

/// PCG increment constant
const INCREMENT: u64 = 1442695040888963407;

/// Seeded 32-bit generator with 64-bit internal state.
///
/// The same seed always produces the same sequence.
#[derive(Clone, Copy, Debug)]
pub struct Pcg32 {
    state: u64,
}

impl Pcg32 {
    /// Create a generator from a seed, mixing once so nearby seeds don't
    /// produce nearby first outputs
    pub fn new(seed: u64) -> Self {
        let mut rng = Self {
            state: seed.wrapping_add(INCREMENT),
        };
        rng.step();
        rng
    }

    /// Advance the LCG state by one step
    #[inline]
    fn step(&mut self) {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
    }

    /// Next 32-bit value: xorshift the current state, rotate by its top
    /// bits, then advance
    pub fn next_u32(&mut self) -> u32 {
        let state = self.state;
        self.step();

        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Uniform value in `[min, max)`. Returns `min` when the range is empty.
    pub fn gen_range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        min + self.next_u32() % (max - min)
    }
}
