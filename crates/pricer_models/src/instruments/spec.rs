//! Closed instrument variant type.

use super::error::InstrumentError;
use super::payoff::{BarrierDirection, KnockType, OptionType};

/// Instrument description, one variant per supported contract.
///
/// Each variant carries only the fields it needs. Expiries are year
/// fractions from the valuation date.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{InstrumentSpec, OptionType};
///
/// let call = InstrumentSpec::Vanilla {
///     option_type: OptionType::Call,
///     strike: 100.0,
///     expiry: 1.0,
/// };
/// assert_eq!(call.kind(), "Vanilla");
/// assert_eq!(call.intrinsic_value(120.0), 20.0);
/// assert_eq!(call.with_expiry(0.5).expiry(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")
)]
pub enum InstrumentSpec {
    /// European option
    Vanilla {
        /// Call or put
        option_type: OptionType,
        /// Strike price
        strike: f64,
        /// Time to expiry in years
        expiry: f64,
    },
    /// Option exercisable at any time up to expiry
    American {
        /// Call or put
        option_type: OptionType,
        /// Strike price
        strike: f64,
        /// Time to expiry in years
        expiry: f64,
    },
    /// Cash-or-nothing digital option
    Digital {
        /// Call pays when S_T > K, put when S_T < K
        option_type: OptionType,
        /// Strike price
        strike: f64,
        /// Time to expiry in years
        expiry: f64,
        /// Cash amount paid when in the money
        payout: f64,
    },
    /// Single barrier knock-in or knock-out option
    Barrier {
        /// Call or put
        option_type: OptionType,
        /// Strike price
        strike: f64,
        /// Time to expiry in years
        expiry: f64,
        /// Barrier level
        barrier: f64,
        /// Barrier above or below spot
        direction: BarrierDirection,
        /// Knock-in or knock-out
        knock: KnockType,
    },
    /// Average-price option
    Asian {
        /// Call or put
        option_type: OptionType,
        /// Strike price
        strike: f64,
        /// Time to expiry in years
        expiry: f64,
    },
    /// Forward contract
    Forward {
        /// Agreed delivery price
        delivery_price: f64,
        /// Time to delivery in years
        expiry: f64,
    },
}

impl InstrumentSpec {
    /// Variant name.
    pub fn kind(&self) -> &'static str {
        match self {
            InstrumentSpec::Vanilla { .. } => "Vanilla",
            InstrumentSpec::American { .. } => "American",
            InstrumentSpec::Digital { .. } => "Digital",
            InstrumentSpec::Barrier { .. } => "Barrier",
            InstrumentSpec::Asian { .. } => "Asian",
            InstrumentSpec::Forward { .. } => "Forward",
        }
    }

    /// Time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        match *self {
            InstrumentSpec::Vanilla { expiry, .. }
            | InstrumentSpec::American { expiry, .. }
            | InstrumentSpec::Digital { expiry, .. }
            | InstrumentSpec::Barrier { expiry, .. }
            | InstrumentSpec::Asian { expiry, .. }
            | InstrumentSpec::Forward { expiry, .. } => expiry,
        }
    }

    /// Returns a copy with the expiry replaced.
    pub fn with_expiry(mut self, new_expiry: f64) -> Self {
        match &mut self {
            InstrumentSpec::Vanilla { expiry, .. }
            | InstrumentSpec::American { expiry, .. }
            | InstrumentSpec::Digital { expiry, .. }
            | InstrumentSpec::Barrier { expiry, .. }
            | InstrumentSpec::Asian { expiry, .. }
            | InstrumentSpec::Forward { expiry, .. } => *expiry = new_expiry,
        }
        self
    }

    /// Strike, or delivery price for forwards.
    #[inline]
    pub fn strike(&self) -> f64 {
        match *self {
            InstrumentSpec::Vanilla { strike, .. }
            | InstrumentSpec::American { strike, .. }
            | InstrumentSpec::Digital { strike, .. }
            | InstrumentSpec::Barrier { strike, .. }
            | InstrumentSpec::Asian { strike, .. } => strike,
            InstrumentSpec::Forward { delivery_price, .. } => delivery_price,
        }
    }

    /// Call/put flag, absent for forwards.
    pub fn option_type(&self) -> Option<OptionType> {
        match *self {
            InstrumentSpec::Vanilla { option_type, .. }
            | InstrumentSpec::American { option_type, .. }
            | InstrumentSpec::Digital { option_type, .. }
            | InstrumentSpec::Barrier { option_type, .. }
            | InstrumentSpec::Asian { option_type, .. } => Some(option_type),
            InstrumentSpec::Forward { .. } => None,
        }
    }

    /// Value if exercised or settled immediately at `spot`.
    ///
    /// Path-dependent contracts (barrier, Asian) use the vanilla payoff of
    /// the given spot, which is the fallback value for a degenerate price.
    pub fn intrinsic_value(&self, spot: f64) -> f64 {
        match *self {
            InstrumentSpec::Vanilla { option_type, strike, .. }
            | InstrumentSpec::American { option_type, strike, .. }
            | InstrumentSpec::Barrier { option_type, strike, .. }
            | InstrumentSpec::Asian { option_type, strike, .. } => {
                option_type.intrinsic(spot, strike)
            }
            InstrumentSpec::Digital {
                option_type,
                strike,
                payout,
                ..
            } => {
                let in_the_money = match option_type {
                    OptionType::Call => spot > strike,
                    OptionType::Put => spot < strike,
                };
                if in_the_money {
                    payout
                } else {
                    0.0
                }
            }
            InstrumentSpec::Forward { delivery_price, .. } => spot - delivery_price,
        }
    }

    /// Validates the contract terms.
    ///
    /// # Errors
    ///
    /// Returns the first offending field:
    /// - non-finite or negative expiry
    /// - non-positive strike, barrier or payout
    /// - non-finite or negative delivery price
    pub fn validate(&self) -> Result<(), InstrumentError> {
        let expiry = self.expiry();
        if !expiry.is_finite() || expiry < 0.0 {
            return Err(InstrumentError::InvalidExpiry { expiry });
        }

        match *self {
            InstrumentSpec::Forward { delivery_price, .. } => {
                if !delivery_price.is_finite() || delivery_price < 0.0 {
                    return Err(InstrumentError::InvalidParameter {
                        name: "delivery_price",
                        message: format!("must be non-negative and finite, got {}", delivery_price),
                    });
                }
            }
            _ => {
                let strike = self.strike();
                if !strike.is_finite() || strike <= 0.0 {
                    return Err(InstrumentError::InvalidStrike { strike });
                }
            }
        }

        match *self {
            InstrumentSpec::Digital { payout, .. } if !(payout.is_finite() && payout > 0.0) => {
                Err(InstrumentError::InvalidPayout { payout })
            }
            InstrumentSpec::Barrier { barrier, .. } if !(barrier.is_finite() && barrier > 0.0) => {
                Err(InstrumentError::InvalidBarrier { barrier })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn barrier() -> InstrumentSpec {
        InstrumentSpec::Barrier {
            option_type: OptionType::Call,
            strike: 100.0,
            expiry: 1.0,
            barrier: 120.0,
            direction: BarrierDirection::Up,
            knock: KnockType::Out,
        }
    }

    #[test]
    fn test_accessors() {
        let b = barrier();
        assert_eq!(b.kind(), "Barrier");
        assert_eq!(b.strike(), 100.0);
        assert_eq!(b.option_type(), Some(OptionType::Call));
        assert_eq!(b.with_expiry(0.25).expiry(), 0.25);

        let f = InstrumentSpec::Forward {
            delivery_price: 95.0,
            expiry: 2.0,
        };
        assert_eq!(f.strike(), 95.0);
        assert_eq!(f.option_type(), None);
        assert_eq!(f.intrinsic_value(100.0), 5.0);
        assert_eq!(f.intrinsic_value(90.0), -5.0);
    }

    #[test]
    fn test_digital_intrinsic_is_indicator() {
        let d = InstrumentSpec::Digital {
            option_type: OptionType::Put,
            strike: 100.0,
            expiry: 0.0,
            payout: 7.0,
        };
        assert_eq!(d.intrinsic_value(99.0), 7.0);
        assert_eq!(d.intrinsic_value(100.0), 0.0);
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(barrier().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_strike() {
        let spec = InstrumentSpec::Vanilla {
            option_type: OptionType::Call,
            strike: 0.0,
            expiry: 1.0,
        };
        assert_eq!(
            spec.validate(),
            Err(InstrumentError::InvalidStrike { strike: 0.0 })
        );
    }

    #[test]
    fn test_validate_rejects_negative_expiry() {
        let spec = barrier().with_expiry(-0.1);
        assert_eq!(spec.validate().unwrap_err().field(), "expiry");
    }

    #[test]
    fn test_validate_rejects_bad_barrier_and_payout() {
        let spec = InstrumentSpec::Barrier {
            option_type: OptionType::Put,
            strike: 100.0,
            expiry: 1.0,
            barrier: f64::NAN,
            direction: BarrierDirection::Down,
            knock: KnockType::In,
        };
        assert_eq!(spec.validate().unwrap_err().field(), "barrier");

        let spec = InstrumentSpec::Digital {
            option_type: OptionType::Call,
            strike: 100.0,
            expiry: 1.0,
            payout: 0.0,
        };
        assert_eq!(spec.validate().unwrap_err().field(), "payout");
    }

    #[test]
    fn test_serde_tagged_representation() {
        let json = r#"{"type":"barrier","optionType":"call","strike":100.0,"expiry":1.0,
            "barrier":120.0,"direction":"up","knock":"out"}"#;
        let spec: InstrumentSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec, barrier());

        let json = r#"{"type":"forward","deliveryPrice":95.0,"expiry":2.0}"#;
        let spec: InstrumentSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.strike(), 95.0);
    }
}
