//! Simulation resource limits.
//!
//! Path, step and fixing counts are checked before any allocation or
//! simulation so that an oversized request fails fast with
//! [`PricingError::ResourceLimit`].

use pricer_core::types::PricingError;
use pricer_models::methods::PricingMethod;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path or lattice.
pub const MAX_STEPS: usize = 10_000;

/// Maximum number of averaging dates for an Asian option.
pub const MAX_FIXINGS: usize = 10_000;

/// Checks a single count against `[1, max]`.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::config::check_count;
///
/// assert!(check_count("paths", 1_000, 10_000).is_ok());
/// assert!(check_count("paths", 0, 10_000).is_err());
/// ```
pub fn check_count(parameter: &str, value: usize, max: usize) -> Result<(), PricingError> {
    if value == 0 || value > max {
        return Err(PricingError::ResourceLimit {
            parameter: parameter.to_string(),
            value,
            max,
        });
    }
    Ok(())
}

/// Validates every count carried by the method.
///
/// Methods without counts always pass.
///
/// # Errors
///
/// Returns `PricingError::ResourceLimit` naming the first offending count:
/// - `paths` is 0 or greater than [`MAX_PATHS`]
/// - `steps` is 0 or greater than [`MAX_STEPS`]
/// - `fixings` is 0 or greater than [`MAX_FIXINGS`]
pub fn validate_limits(method: &PricingMethod) -> Result<(), PricingError> {
    match *method {
        PricingMethod::BinomialLattice { steps } => check_count("steps", steps, MAX_STEPS),
        PricingMethod::McDiscrete(params) | PricingMethod::McBridge(params) => {
            check_count("paths", params.paths, MAX_PATHS)?;
            check_count("steps", params.steps, MAX_STEPS)
        }
        PricingMethod::ArithmeticMc { paths, fixings, .. } => {
            check_count("paths", paths, MAX_PATHS)?;
            check_count("fixings", fixings, MAX_FIXINGS)
        }
        PricingMethod::ClosedForm
        | PricingMethod::GeometricClosed
        | PricingMethod::DiscountedValue => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::methods::SimulationParams;

    #[test]
    fn test_limits_accept_boundaries() {
        let method = PricingMethod::McBridge(SimulationParams {
            paths: MAX_PATHS,
            steps: MAX_STEPS,
            seed: 1,
        });
        assert!(validate_limits(&method).is_ok());
        assert!(validate_limits(&PricingMethod::BinomialLattice { steps: 1 }).is_ok());
    }

    #[test]
    fn test_limits_reject_zero_paths() {
        let method = PricingMethod::McDiscrete(SimulationParams {
            paths: 0,
            steps: 10,
            seed: 1,
        });
        assert_eq!(
            validate_limits(&method),
            Err(PricingError::ResourceLimit {
                parameter: "paths".to_string(),
                value: 0,
                max: MAX_PATHS,
            })
        );
    }

    #[test]
    fn test_limits_reject_excess_counts() {
        let err = validate_limits(&PricingMethod::BinomialLattice {
            steps: MAX_STEPS + 1,
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("steps"));

        let err = validate_limits(&PricingMethod::ArithmeticMc {
            paths: 100,
            fixings: MAX_FIXINGS + 1,
            seed: 1,
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("fixings"));
    }

    #[test]
    fn test_methods_without_counts_pass() {
        assert!(validate_limits(&PricingMethod::ClosedForm).is_ok());
        assert!(validate_limits(&PricingMethod::GeometricClosed).is_ok());
        assert!(validate_limits(&PricingMethod::DiscountedValue).is_ok());
    }
}
