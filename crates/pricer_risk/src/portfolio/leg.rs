//! Portfolio legs and leg groups.

use pricer_core::types::MarketState;
use pricer_models::instruments::InstrumentSpec;
use pricer_models::methods::PricingMethod;

use super::ids::{GroupId, LegId};

/// One signed position in an instrument.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::{InstrumentSpec, OptionType};
/// use pricer_models::methods::PricingMethod;
/// use pricer_risk::portfolio::PortfolioLeg;
///
/// let leg = PortfolioLeg::new(
///     "short-put",
///     InstrumentSpec::Vanilla { option_type: OptionType::Put, strike: 95.0, expiry: 0.5 },
///     -2.0,
/// )
/// .with_volatility(0.24);
///
/// assert!(leg.active);
/// assert_eq!(leg.method(), PricingMethod::ClosedForm);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PortfolioLeg {
    /// Leg identifier
    pub id: LegId,
    /// Contract held
    pub instrument: InstrumentSpec,
    /// Pricing method; the instrument's preferred method when absent
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub method: Option<PricingMethod>,
    /// Signed quantity: positive long, negative short
    pub quantity: f64,
    /// Inactive legs are carried but contribute nothing
    #[cfg_attr(feature = "serde", serde(default = "default_active"))]
    pub active: bool,
    /// Optional group membership
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub group: Option<GroupId>,
    /// Leg-specific implied volatility overriding the market volatility
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub volatility: Option<f64>,
}

#[cfg(feature = "serde")]
fn default_active() -> bool {
    true
}

impl PortfolioLeg {
    /// Creates an active leg priced with the instrument's preferred method.
    pub fn new(id: impl Into<LegId>, instrument: InstrumentSpec, quantity: f64) -> Self {
        Self {
            id: id.into(),
            instrument,
            method: None,
            quantity,
            active: true,
            group: None,
            volatility: None,
        }
    }

    /// Sets an explicit pricing method.
    pub fn with_method(mut self, method: PricingMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// Assigns the leg to a group.
    pub fn with_group(mut self, group: impl Into<GroupId>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Sets a leg-specific volatility.
    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Marks the leg inactive.
    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }

    /// Pricing method in effect.
    pub fn method(&self) -> PricingMethod {
        self.method
            .unwrap_or_else(|| PricingMethod::default_for(&self.instrument))
    }

    /// Market seen by this leg: the leg volatility replaces the market's.
    pub fn market(&self, market: &MarketState) -> MarketState {
        match self.volatility {
            Some(vol) => market.with_volatility(vol),
            None => *market,
        }
    }
}

/// Named set of legs, referenced by id.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LegGroup {
    /// Group identifier
    pub id: GroupId,
    /// Display name
    pub name: String,
    /// Member legs
    #[cfg_attr(feature = "serde", serde(default))]
    pub leg_ids: Vec<LegId>,
}

impl LegGroup {
    /// Creates a group with the given members.
    pub fn new(
        id: impl Into<GroupId>,
        name: impl Into<String>,
        leg_ids: impl IntoIterator<Item = LegId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            leg_ids: leg_ids.into_iter().collect(),
        }
    }
}
