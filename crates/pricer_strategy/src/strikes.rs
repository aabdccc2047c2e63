//! Strike ladder around the money.

use pricer_core::types::MarketState;

use crate::params::GenerationParams;
use crate::view::NormalisedView;

/// Smallest structural width, in percent of spot.
pub const MIN_WIDTH_PCT: f64 = 2.0;

/// Fraction of the one-sigma move used for the derived width.
pub const SIGMA_WIDTH_FRACTION: f64 = 0.6;

/// Strikes spaced one structural width apart, centred on the money.
///
/// # Examples
///
/// ```
/// use pricer_strategy::strikes::StrikeLadder;
///
/// let ladder = StrikeLadder::new(101.3, 5.0, 2.5);
/// assert_eq!(ladder.atm, 102.5);
/// assert_eq!(ladder.width, 5.0);
/// assert_eq!(ladder.strike(-1), 97.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrikeLadder {
    /// Strike closest to spot on the step grid
    pub atm: f64,
    /// Distance between rungs, a positive multiple of the step
    pub width: f64,
}

impl StrikeLadder {
    /// Builds a ladder from spot, raw width and strike step.
    pub fn new(spot: f64, raw_width: f64, step: f64) -> Self {
        let atm = ((spot / step).round() * step).max(step);
        let width = ((raw_width / step).round() * step).max(step);
        Self { atm, width }
    }

    /// Strike `offset` widths from the money.
    #[inline]
    pub fn strike(&self, offset: i32) -> f64 {
        self.atm + offset as f64 * self.width
    }

    /// One width above the money.
    pub fn up(&self) -> f64 {
        self.strike(1)
    }

    /// One width below the money.
    pub fn down(&self) -> f64 {
        self.strike(-1)
    }
}

/// Structural width in percent of spot.
///
/// An explicit override wins; otherwise the larger of the expected move and
/// `0.6·σ√T·100` for the near expiry, never below [`MIN_WIDTH_PCT`].
pub fn width_pct(market: &MarketState, view: &NormalisedView, params: &GenerationParams) -> f64 {
    if let Some(width) = params.width_pct {
        return width;
    }
    let sigma_move = SIGMA_WIDTH_FRACTION
        * market.effective_volatility()
        * params.near_expiry().sqrt()
        * 100.0;
    MIN_WIDTH_PCT.max(view.move_size_pct.max(sigma_move))
}

/// Ladder for a market, view and generation parameters.
pub fn ladder(market: &MarketState, view: &NormalisedView, params: &GenerationParams) -> StrikeLadder {
    let raw_width = market.spot * width_pct(market, view, params) / 100.0;
    StrikeLadder::new(market.spot, raw_width, params.strike_step)
}
