//! Market view and its normalised form.

use crate::error::StrategyError;

/// Expected direction of the underlying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Expects a rise
    Bullish,
    /// Expects a fall
    Bearish,
    /// No directional opinion
    #[default]
    Neutral,
}

impl Direction {
    /// +1 bullish, -1 bearish, 0 neutral.
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Bullish => 1.0,
            Direction::Bearish => -1.0,
            Direction::Neutral => 0.0,
        }
    }

    /// Lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Bullish => "bullish",
            Direction::Bearish => "bearish",
            Direction::Neutral => "neutral",
        }
    }
}

/// How the expected move is expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MoveMode {
    /// `move_pct` in the view direction
    #[default]
    Percent,
    /// Explicit `target_price`
    Target,
}

/// Expected change in implied volatility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VolView {
    /// Volatility expected to rise
    Up,
    /// Volatility expected to fall
    Down,
    /// No volatility opinion
    #[default]
    Flat,
}

impl VolView {
    /// +1 up, -1 down, 0 flat.
    pub fn sign(&self) -> f64 {
        match self {
            VolView::Up => 1.0,
            VolView::Down => -1.0,
            VolView::Flat => 0.0,
        }
    }
}

/// Caller's view of the underlying over a horizon.
///
/// # Examples
///
/// ```
/// use pricer_strategy::view::{Direction, MarketView};
///
/// let view = MarketView { direction: Direction::Bearish, move_pct: 5.0, ..Default::default() };
/// let normalised = view.normalise(100.0).unwrap();
/// assert_eq!(normalised.move_pct, -5.0);
/// assert_eq!(normalised.target_spot, 95.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct MarketView {
    /// Expected direction
    pub direction: Direction,
    /// Whether `move_pct` or `target_price` is authoritative
    pub move_mode: MoveMode,
    /// Size of the expected move in percent
    pub move_pct: f64,
    /// Expected price at the horizon
    pub target_price: Option<f64>,
    /// Horizon in calendar days
    pub horizon_days: f64,
    /// Expected volatility direction
    pub vol_view: VolView,
    /// Size of the expected volatility change, absolute
    pub vol_shift: f64,
    /// A scheduled event (earnings, data) falls inside the horizon
    pub event: bool,
}

impl Default for MarketView {
    fn default() -> Self {
        Self {
            direction: Direction::Neutral,
            move_mode: MoveMode::Percent,
            move_pct: 0.0,
            target_price: None,
            horizon_days: 30.0,
            vol_view: VolView::Flat,
            vol_shift: 0.0,
            event: false,
        }
    }
}

/// View resolved against the current spot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalisedView {
    /// Expected direction
    pub direction: Direction,
    /// Signed expected move in percent; zero for a neutral percent view
    pub move_pct: f64,
    /// Size of the expected move in percent, whatever the direction
    pub move_size_pct: f64,
    /// Spot implied by the signed move
    pub target_spot: f64,
    /// Horizon in calendar days, at least one
    pub horizon_days: f64,
    /// Expected volatility direction
    pub vol_view: VolView,
    /// Signed absolute volatility change
    pub vol_shift: f64,
    /// Event flag
    pub event: bool,
}

impl MarketView {
    /// Resolves the view against `spot`.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::InvalidView` when:
    /// - a numeric field is not finite
    /// - target mode has no positive target price
    /// - the target contradicts a bullish or bearish direction
    pub fn normalise(&self, spot: f64) -> Result<NormalisedView, StrategyError> {
        for (name, value) in [
            ("movePct", self.move_pct),
            ("horizonDays", self.horizon_days),
            ("volShift", self.vol_shift),
        ] {
            if !value.is_finite() {
                return Err(StrategyError::InvalidView(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        let (move_pct, move_size_pct) = match self.move_mode {
            MoveMode::Percent => {
                let size = self.move_pct.abs();
                (self.direction.sign() * size, size)
            }
            MoveMode::Target => {
                let target = self
                    .target_price
                    .filter(|t| t.is_finite() && *t > 0.0)
                    .ok_or_else(|| {
                        StrategyError::InvalidView(
                            "targetPrice must be positive in target mode".to_string(),
                        )
                    })?;
                let signed = (target / spot - 1.0) * 100.0;
                if signed * self.direction.sign() < 0.0 {
                    return Err(StrategyError::InvalidView(format!(
                        "target {target} contradicts a {} view from spot {spot}",
                        self.direction.as_str()
                    )));
                }
                (signed, signed.abs())
            }
        };

        Ok(NormalisedView {
            direction: self.direction,
            move_pct,
            move_size_pct,
            target_spot: spot * (1.0 + move_pct / 100.0),
            horizon_days: self.horizon_days.max(1.0),
            vol_view: self.vol_view,
            vol_shift: self.vol_view.sign() * self.vol_shift.abs(),
            event: self.event,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_percent_move_takes_direction_sign() {
        let view = MarketView {
            direction: Direction::Bullish,
            move_pct: -4.0,
            ..Default::default()
        };
        let n = view.normalise(200.0).unwrap();
        assert_eq!(n.move_pct, 4.0);
        assert_eq!(n.target_spot, 208.0);
    }

    #[test]
    fn test_neutral_percent_keeps_size_only() {
        let view = MarketView {
            move_pct: 8.0,
            ..Default::default()
        };
        let n = view.normalise(100.0).unwrap();
        assert_eq!(n.move_pct, 0.0);
        assert_eq!(n.move_size_pct, 8.0);
        assert_eq!(n.target_spot, 100.0);
    }

    #[test]
    fn test_target_mode_resolves_move() {
        let view = MarketView {
            direction: Direction::Bearish,
            move_mode: MoveMode::Target,
            target_price: Some(90.0),
            ..Default::default()
        };
        let n = view.normalise(100.0).unwrap();
        assert_relative_eq!(n.move_pct, -10.0, epsilon = 1e-12);
        assert_relative_eq!(n.target_spot, 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_target_mode_rejects_contradiction_and_missing_target() {
        let contradictory = MarketView {
            direction: Direction::Bullish,
            move_mode: MoveMode::Target,
            target_price: Some(90.0),
            ..Default::default()
        };
        assert!(matches!(
            contradictory.normalise(100.0),
            Err(StrategyError::InvalidView(_))
        ));

        let missing = MarketView {
            move_mode: MoveMode::Target,
            ..Default::default()
        };
        assert!(matches!(missing.normalise(100.0), Err(StrategyError::InvalidView(_))));
    }

    #[test]
    fn test_horizon_and_vol_shift() {
        let view = MarketView {
            horizon_days: 0.0,
            vol_view: VolView::Down,
            vol_shift: 0.03,
            ..Default::default()
        };
        let n = view.normalise(100.0).unwrap();
        assert_eq!(n.horizon_days, 1.0);
        assert_eq!(n.vol_shift, -0.03);

        let flat = MarketView {
            vol_shift: 0.05,
            ..Default::default()
        };
        assert_eq!(flat.normalise(100.0).unwrap().vol_shift, 0.0);
    }

    #[test]
    fn test_rejects_non_finite() {
        let view = MarketView {
            horizon_days: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(view.normalise(100.0), Err(StrategyError::InvalidView(_))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_view_from_json() {
        let json = r#"{"direction":"bullish","moveMode":"target","targetPrice":110.0,
            "horizonDays":21,"volView":"up","volShift":0.02,"event":true}"#;
        let view: MarketView = serde_json::from_str(json).unwrap();
        assert_eq!(view.direction, Direction::Bullish);
        assert_eq!(view.move_mode, MoveMode::Target);
        assert_eq!(view.target_price, Some(110.0));
        assert!(view.event);
    }
}
