//! Pricing method selection.
//!
//! [`PricingMethod`] names the numerical scheme and carries its parameters.
//! Each method is legal for a fixed set of [`InstrumentSpec`] variants; the
//! pairing is checked at the boundary with [`PricingMethod::ensure_supported`].

use pricer_core::types::PricingError;

use crate::instruments::InstrumentSpec;

/// Default number of Monte Carlo paths.
pub const DEFAULT_PATHS: usize = 20_000;

/// Default number of monitoring steps per path.
pub const DEFAULT_STEPS: usize = 100;

/// Default lattice depth.
pub const DEFAULT_LATTICE_STEPS: usize = 200;

/// Default simulation seed.
pub const DEFAULT_SEED: u64 = 42;

/// Monte Carlo parameters for path simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationParams {
    /// Number of simulated paths
    pub paths: usize,
    /// Number of time steps per path
    pub steps: usize,
    /// Seed for the deterministic random stream
    pub seed: u64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            paths: DEFAULT_PATHS,
            steps: DEFAULT_STEPS,
            seed: DEFAULT_SEED,
        }
    }
}

/// Numerical pricing method with its parameters.
///
/// | Method | Instruments |
/// |--------|-------------|
/// | `ClosedForm` | Vanilla, Digital |
/// | `BinomialLattice` | Vanilla, American |
/// | `McDiscrete`, `McBridge` | Barrier |
/// | `GeometricClosed`, `ArithmeticMc` | Asian |
/// | `DiscountedValue` | Forward |
///
/// # Examples
/// ```
/// use pricer_models::instruments::{InstrumentSpec, OptionType};
/// use pricer_models::methods::PricingMethod;
///
/// let american = InstrumentSpec::American {
///     option_type: OptionType::Put,
///     strike: 100.0,
///     expiry: 1.0,
/// };
/// assert!(PricingMethod::BinomialLattice { steps: 200 }.supports(&american));
/// assert!(!PricingMethod::ClosedForm.supports(&american));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "name", rename_all = "snake_case"))]
pub enum PricingMethod {
    /// Black-Scholes-Merton closed form
    ClosedForm,
    /// Cox-Ross-Rubinstein recombining tree
    BinomialLattice {
        /// Number of time steps
        steps: usize,
    },
    /// Path simulation with monitoring at sampled dates only
    McDiscrete(SimulationParams),
    /// Path simulation with Brownian-bridge crossing correction
    McBridge(SimulationParams),
    /// Kemna-Vorst geometric average closed form
    GeometricClosed,
    /// Path simulation of the arithmetic average
    ArithmeticMc {
        /// Number of simulated paths
        paths: usize,
        /// Number of equally spaced averaging dates
        fixings: usize,
        /// Seed for the deterministic random stream
        seed: u64,
    },
    /// Discounted forward value
    DiscountedValue,
}

impl PricingMethod {
    /// Snake-case method name.
    pub fn name(&self) -> &'static str {
        match self {
            PricingMethod::ClosedForm => "closed_form",
            PricingMethod::BinomialLattice { .. } => "binomial_lattice",
            PricingMethod::McDiscrete(_) => "mc_discrete",
            PricingMethod::McBridge(_) => "mc_bridge",
            PricingMethod::GeometricClosed => "geometric_closed",
            PricingMethod::ArithmeticMc { .. } => "arithmetic_mc",
            PricingMethod::DiscountedValue => "discounted_value",
        }
    }

    /// Seed of a simulation method.
    pub fn seed(&self) -> Option<u64> {
        match *self {
            PricingMethod::McDiscrete(params) | PricingMethod::McBridge(params) => {
                Some(params.seed)
            }
            PricingMethod::ArithmeticMc { seed, .. } => Some(seed),
            _ => None,
        }
    }

    /// Returns true if the method can price the instrument.
    pub fn supports(&self, instrument: &InstrumentSpec) -> bool {
        matches!(
            (self, instrument),
            (PricingMethod::ClosedForm, InstrumentSpec::Vanilla { .. })
                | (PricingMethod::ClosedForm, InstrumentSpec::Digital { .. })
                | (PricingMethod::BinomialLattice { .. }, InstrumentSpec::Vanilla { .. })
                | (PricingMethod::BinomialLattice { .. }, InstrumentSpec::American { .. })
                | (PricingMethod::McDiscrete(_), InstrumentSpec::Barrier { .. })
                | (PricingMethod::McBridge(_), InstrumentSpec::Barrier { .. })
                | (PricingMethod::GeometricClosed, InstrumentSpec::Asian { .. })
                | (PricingMethod::ArithmeticMc { .. }, InstrumentSpec::Asian { .. })
                | (PricingMethod::DiscountedValue, InstrumentSpec::Forward { .. })
        )
    }

    /// Fails with `UnsupportedMethod` for an illegal pairing.
    pub fn ensure_supported(&self, instrument: &InstrumentSpec) -> Result<(), PricingError> {
        if self.supports(instrument) {
            Ok(())
        } else {
            Err(PricingError::UnsupportedMethod {
                instrument: instrument.kind().to_string(),
                method: self.name().to_string(),
            })
        }
    }

    /// Preferred method for an instrument with default parameters.
    pub fn default_for(instrument: &InstrumentSpec) -> Self {
        match instrument {
            InstrumentSpec::Vanilla { .. } | InstrumentSpec::Digital { .. } => {
                PricingMethod::ClosedForm
            }
            InstrumentSpec::American { .. } => PricingMethod::BinomialLattice {
                steps: DEFAULT_LATTICE_STEPS,
            },
            InstrumentSpec::Barrier { .. } => PricingMethod::McBridge(SimulationParams::default()),
            InstrumentSpec::Asian { .. } => PricingMethod::GeometricClosed,
            InstrumentSpec::Forward { .. } => PricingMethod::DiscountedValue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::{BarrierDirection, KnockType, OptionType};

    fn all_instruments() -> Vec<InstrumentSpec> {
        let (option_type, strike, expiry) = (OptionType::Call, 100.0, 1.0);
        vec![
            InstrumentSpec::Vanilla { option_type, strike, expiry },
            InstrumentSpec::American { option_type, strike, expiry },
            InstrumentSpec::Digital { option_type, strike, expiry, payout: 1.0 },
            InstrumentSpec::Barrier {
                option_type,
                strike,
                expiry,
                barrier: 120.0,
                direction: BarrierDirection::Up,
                knock: KnockType::Out,
            },
            InstrumentSpec::Asian { option_type, strike, expiry },
            InstrumentSpec::Forward { delivery_price: strike, expiry },
        ]
    }

    #[test]
    fn test_default_method_is_always_supported() {
        for instrument in all_instruments() {
            let method = PricingMethod::default_for(&instrument);
            assert!(method.supports(&instrument), "{}", instrument.kind());
        }
    }

    #[test]
    fn test_legal_pairing_count() {
        let sim = SimulationParams::default();
        let methods = [
            PricingMethod::ClosedForm,
            PricingMethod::BinomialLattice { steps: 10 },
            PricingMethod::McDiscrete(sim),
            PricingMethod::McBridge(sim),
            PricingMethod::GeometricClosed,
            PricingMethod::ArithmeticMc { paths: 10, fixings: 4, seed: 1 },
            PricingMethod::DiscountedValue,
        ];
        let legal = all_instruments()
            .iter()
            .flat_map(|i| methods.iter().filter(move |m| m.supports(i)))
            .count();
        assert_eq!(legal, 9);
    }

    #[test]
    fn test_ensure_supported_names_pairing() {
        let forward = InstrumentSpec::Forward { delivery_price: 100.0, expiry: 1.0 };
        let err = PricingMethod::ClosedForm.ensure_supported(&forward).unwrap_err();
        assert_eq!(
            err,
            PricingError::UnsupportedMethod {
                instrument: "Forward".to_string(),
                method: "closed_form".to_string(),
            }
        );
    }

    #[test]
    fn test_seed_only_for_simulation() {
        assert_eq!(PricingMethod::ClosedForm.seed(), None);
        assert_eq!(
            PricingMethod::McBridge(SimulationParams { paths: 1, steps: 1, seed: 7 }).seed(),
            Some(7)
        );
        assert_eq!(
            PricingMethod::ArithmeticMc { paths: 1, fixings: 1, seed: 9 }.seed(),
            Some(9)
        );
    }

    #[test]
    fn test_serde_tagged_representation() {
        let m: PricingMethod =
            serde_json::from_str(r#"{"name":"mc_bridge","paths":1000,"steps":50,"seed":3}"#)
                .unwrap();
        assert_eq!(
            m,
            PricingMethod::McBridge(SimulationParams { paths: 1000, steps: 50, seed: 3 })
        );
        let m: PricingMethod =
            serde_json::from_str(r#"{"name":"binomial_lattice","steps":500}"#).unwrap();
        assert_eq!(m, PricingMethod::BinomialLattice { steps: 500 });
        let m: PricingMethod = serde_json::from_str(r#"{"name":"closed_form"}"#).unwrap();
        assert_eq!(m, PricingMethod::ClosedForm);
    }
}
