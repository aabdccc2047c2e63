//! 64-bit linear congruential generator.
//!
//! `state ← state · 6364136223846793005 + 1442695040888963407 (mod 2⁶⁴)`
//!
//! The multiplier and increment are Knuth's MMIX constants. Only the upper
//! bits of the state are handed out, since the low bits of a power-of-two
//! modulus LCG have short periods.

use rand::{Error, RngCore, SeedableRng};

/// LCG multiplier.
pub const MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// LCG increment.
pub const INCREMENT: u64 = 1_442_695_040_888_963_407;

/// 2⁻⁵³, the spacing of the uniform grid in [0, 1).
const UNIT_53: f64 = 1.0 / (1u64 << 53) as f64;

/// Seedable 64-bit linear congruential generator.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::Lcg64;
/// use rand::{RngCore, SeedableRng};
///
/// let mut a = Lcg64::new(7);
/// let mut b = Lcg64::seed_from_u64(7);
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg64 {
    state: u64,
}

impl Lcg64 {
    /// Creates a generator whose initial state is the seed itself.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advances the recurrence and returns the new state.
    #[inline]
    fn step(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    /// Uniform value in [0, 1) from the top 53 bits of the next state.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.step() >> 11) as f64 * UNIT_53
    }
}

impl RngCore for Lcg64 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lcg64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    /// Uses the value directly as the initial state.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
