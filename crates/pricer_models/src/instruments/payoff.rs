//! Option payoff and barrier classification types.

/// Call or put.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
/// assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy: max(S - K, 0)
    Call,
    /// Right to sell: max(K - S, 0)
    Put,
}

impl OptionType {
    /// +1 for calls, -1 for puts.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Payoff at exercise against the given spot.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        (self.sign() * (spot - strike)).max(0.0)
    }

    /// Lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

/// Side of spot on which the barrier sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BarrierDirection {
    /// Barrier above spot; touched when S ≥ B
    Up,
    /// Barrier below spot; touched when S ≤ B
    Down,
}

impl BarrierDirection {
    /// Returns true when `price` is at or beyond the barrier.
    #[inline]
    pub fn is_breached(&self, price: f64, barrier: f64) -> bool {
        match self {
            BarrierDirection::Up => price >= barrier,
            BarrierDirection::Down => price <= barrier,
        }
    }
}

/// Whether touching the barrier activates or extinguishes the option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum KnockType {
    /// Pays only if the barrier was touched
    In,
    /// Pays only if the barrier was never touched
    Out,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_and_intrinsic() {
        assert_eq!(OptionType::Call.sign(), 1.0);
        assert_eq!(OptionType::Put.sign(), -1.0);
        assert_eq!(OptionType::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.intrinsic(90.0, 100.0), 0.0);
    }

    #[test]
    fn test_breach_rule_is_inclusive() {
        assert!(BarrierDirection::Up.is_breached(120.0, 120.0));
        assert!(!BarrierDirection::Up.is_breached(119.9, 120.0));
        assert!(BarrierDirection::Down.is_breached(80.0, 80.0));
        assert!(!BarrierDirection::Down.is_breached(80.1, 80.0));
    }
}
