//! Log-normal path step.
//!
//! Uses the exact log-space solution of geometric Brownian motion with a
//! continuous dividend yield:
//! ```text
//! S(t+dt) = S(t) × exp((r - q - σ²/2)dt + σ√dt × Z)
//! ```

use pricer_core::types::MarketState;

/// Precomputed per-step drift and diffusion for a fixed step size.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::MarketState;
/// use pricer_pricing::mc::GbmStepper;
///
/// let market = MarketState::new(100.0, 0.05, 0.0, 0.2);
/// let stepper = GbmStepper::new(&market, 1.0, 4);
/// assert_eq!(stepper.dt(), 0.25);
/// let next = stepper.step(100.0, 0.0);
/// assert!((next - 100.0 * ((0.05 - 0.02) * 0.25_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmStepper {
    dt: f64,
    drift_dt: f64,
    vol_sqrt_dt: f64,
}

impl GbmStepper {
    /// Stepper for `steps` equal intervals over `expiry` years.
    ///
    /// Volatility is taken through [`MarketState::effective_volatility`].
    pub fn new(market: &MarketState, expiry: f64, steps: usize) -> Self {
        let vol = market.effective_volatility();
        let dt = expiry / steps.max(1) as f64;
        Self {
            dt,
            drift_dt: (market.rate - market.dividend - 0.5 * vol * vol) * dt,
            vol_sqrt_dt: vol * dt.sqrt(),
        }
    }

    /// Step size in years.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Advances `spot` by one step using the normal draw `z`.
    #[inline]
    pub fn step(&self, spot: f64, z: f64) -> f64 {
        spot * (self.drift_dt + self.vol_sqrt_dt * z).exp()
    }
}
