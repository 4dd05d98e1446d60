//! Random draws used by episode resolution
//!
//! Every source of chance goes through [`Draws`] so callers can seed it
//! (any `rand::Rng` works) or script it outright in tests.

use rand::Rng;

pub trait Draws {
    /// Base challenge performance, 1..=100
    fn base_stat(&mut self) -> u32;

    /// Diagnostic noise term, -10..=9
    fn random_factor(&mut self) -> i32;

    /// Lip-sync performance before history adjustments, 1..=10
    fn lipsync_roll(&mut self) -> u32;

    /// Uniform index in 0..len. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng> Draws for R {
    fn base_stat(&mut self) -> u32 {
        self.gen_range(1..=100)
    }

    fn random_factor(&mut self) -> i32 {
        self.gen_range(-10..=9)
    }

    fn lipsync_roll(&mut self) -> u32 {
        self.gen_range(1..=10)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}
