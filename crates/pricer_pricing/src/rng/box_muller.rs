//! Box-Muller Gaussian transform.

use rand::Rng;
use rand_distr::Distribution;
use std::f64::consts::PI;

/// Standard normal sampler consuming two successive uniforms per value.
///
/// `z = √(-2 ln(1 - u₁)) · cos(2π u₂)`
///
/// The sine partner of each pair is discarded, so every normal costs exactly
/// two uniform draws and the stream position after `n` normals is always
/// `2n`. Using `1 - u₁` keeps the logarithm finite for `u₁ ∈ [0, 1)`.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::{BoxMuller, Lcg64};
/// use rand_distr::Distribution;
///
/// let mut rng = Lcg64::new(1);
/// let z: f64 = BoxMuller.sample(&mut rng);
/// assert!(z.is_finite());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxMuller;

impl Distribution<f64> for BoxMuller {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u1: f64 = rng.gen();
        let u2: f64 = rng.gen();
        (-2.0 * (1.0 - u1).ln()).sqrt() * (2.0 * PI * u2).cos()
    }
}
