//! Ranked strategy candidate.

use pricer_risk::portfolio::PortfolioLeg;
use pricer_risk::NetGreeks;

use crate::templates::StrategyTemplate;

/// A priced multi-leg structure with its risk profile and fit score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StrategyCandidate {
    /// Display name
    pub name: String,
    /// Structure the legs were built from
    pub template: StrategyTemplate,
    /// Legs as they would be booked
    pub legs: Vec<PortfolioLeg>,
    /// Σ quantity · price; positive for a debit
    pub net_premium: f64,
    /// Net Greeks at inception
    pub net_greeks: NetGreeks,
    /// Largest expiry profit; `None` when unbounded
    pub max_profit: Option<f64>,
    /// Largest expiry loss as a positive number; `None` when unbounded
    pub max_loss: Option<f64>,
    /// Expiry breakevens, ascending
    pub breakevens: Vec<f64>,
    /// Probability the horizon P&L is positive
    pub probability_of_profit: f64,
    /// Fit score in [0, 100]
    pub score: f64,
    /// Strongest signals behind the score
    pub rationale: String,
}

impl StrategyCandidate {
    /// True when the candidate receives premium.
    pub fn is_credit(&self) -> bool {
        self.net_premium < 0.0
    }

    /// True when the expiry loss is bounded.
    pub fn is_defined_risk(&self) -> bool {
        self.max_loss.is_some()
    }
}
