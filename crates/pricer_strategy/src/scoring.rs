//! Heuristic fit score and rationale.
//!
//! Scores start at 50 and move with bounded `tanh` terms, so no single
//! signal can dominate. The final score is clamped to [0, 100] and rounded.

use pricer_risk::NetGreeks;

use crate::params::Constraints;
use crate::view::{Direction, NormalisedView};

const BASE_SCORE: f64 = 50.0;
const DELTA_WEIGHT: f64 = 15.0;
const DELTA_SCALE: f64 = 0.5;
const NEUTRAL_DELTA_PENALTY: f64 = 20.0;
const VEGA_WEIGHT: f64 = 10.0;
const VEGA_SCALE: f64 = 35.0;
const TARGET_WEIGHT: f64 = 20.0;
const PREFERENCE_WEIGHT: f64 = 5.0;
const LEG_BONUS: f64 = 2.0;
const BONUS_LEG_LIMIT: usize = 4;
const MAX_REASONS: usize = 3;

/// Candidate figures the score is computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInputs {
    /// Net Greeks at inception
    pub net_greeks: NetGreeks,
    /// Net premium; positive for a debit
    pub net_premium: f64,
    /// Horizon P&L at the target spot
    pub pnl_at_target: f64,
    /// Bounded expiry loss, if any
    pub max_loss: Option<f64>,
    /// Number of legs
    pub leg_count: usize,
}

/// Score with its explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    /// Fit in [0, 100], rounded
    pub value: f64,
    /// Strongest matched signals
    pub rationale: String,
}

struct Signal {
    contribution: f64,
    reason: Option<String>,
}

impl Signal {
    fn new(contribution: f64, reason: impl Into<String>) -> Self {
        Self {
            contribution,
            reason: Some(reason.into()),
        }
    }

    fn silent(contribution: f64) -> Self {
        Self {
            contribution,
            reason: None,
        }
    }
}

fn sign_of(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        -1.0
    }
}

fn direction_signal(greeks: &NetGreeks, view: &NormalisedView) -> Signal {
    match view.direction {
        Direction::Neutral => {
            let penalty = -NEUTRAL_DELTA_PENALTY * greeks.delta.abs().min(1.0);
            if greeks.delta.abs() < 0.1 {
                Signal::new(penalty, "close to delta neutral")
            } else {
                Signal::silent(penalty)
            }
        }
        direction => Signal::new(
            DELTA_WEIGHT * (greeks.delta / DELTA_SCALE).tanh() * direction.sign(),
            format!("delta aligned with {} view", direction.as_str()),
        ),
    }
}

fn vega_signal(greeks: &NetGreeks, view: &NormalisedView) -> Signal {
    // Vega per unit of volatility rather than per point.
    let vega_unit = greeks.vega * 100.0;
    let contribution = VEGA_WEIGHT * (vega_unit / VEGA_SCALE).tanh() * view.vol_view.sign();
    let reason = if greeks.vega > 0.0 {
        "long vega for rising volatility"
    } else {
        "short vega for falling volatility"
    };
    Signal::new(contribution, reason)
}

fn target_signal(inputs: &ScoreInputs, view: &NormalisedView) -> Signal {
    let norm = inputs
        .max_loss
        .filter(|loss| *loss > 0.0)
        .unwrap_or(inputs.net_premium.abs())
        .max(1e-2);
    let contribution = TARGET_WEIGHT * (inputs.pnl_at_target / norm).tanh();
    Signal::new(
        contribution,
        format!(
            "gains {:.2} at {:.2} over the horizon",
            inputs.pnl_at_target, view.target_spot
        ),
    )
}

fn preference_signals(inputs: &ScoreInputs, constraints: &Constraints) -> [Signal; 2] {
    let tilt = constraints.tilt();
    let income_weight = (-tilt).max(0.0);
    let convexity_weight = tilt.max(0.0);
    let credit = inputs.net_premium < 0.0;
    let greeks = &inputs.net_greeks;

    let income = income_weight
        * PREFERENCE_WEIGHT
        * (sign_of(credit) + sign_of(greeks.theta > 0.0));
    let convexity = convexity_weight
        * PREFERENCE_WEIGHT
        * (0.5 * sign_of(!credit) + 0.75 * sign_of(greeks.gamma > 0.0) + 0.75 * sign_of(greeks.vega > 0.0));

    [
        Signal::new(income, "collects premium with positive theta"),
        Signal::new(convexity, "long gamma and vega convexity"),
    ]
}

fn leg_signal(leg_count: usize) -> Signal {
    let fewer = BONUS_LEG_LIMIT.saturating_sub(leg_count);
    Signal::new(
        LEG_BONUS * fewer as f64,
        format!("simple {leg_count}-leg structure"),
    )
}

/// Scores a candidate against the view and preferences.
///
/// # Examples
///
/// ```
/// use pricer_risk::NetGreeks;
/// use pricer_strategy::params::Constraints;
/// use pricer_strategy::scoring::{score, ScoreInputs};
/// use pricer_strategy::view::{Direction, MarketView};
///
/// let view = MarketView { direction: Direction::Bullish, move_pct: 5.0, ..Default::default() }
///     .normalise(100.0)
///     .unwrap();
/// let inputs = ScoreInputs {
///     net_greeks: NetGreeks { delta: 0.5, ..Default::default() },
///     net_premium: 3.0,
///     pnl_at_target: 2.0,
///     max_loss: Some(3.0),
///     leg_count: 2,
/// };
/// let s = score(&inputs, &view, &Constraints::default());
/// assert!(s.value > 70.0 && s.value <= 100.0);
/// assert!(s.rationale.contains("bullish"));
/// ```
pub fn score(inputs: &ScoreInputs, view: &NormalisedView, constraints: &Constraints) -> Score {
    let [income, convexity] = preference_signals(inputs, constraints);
    let mut signals = vec![
        direction_signal(&inputs.net_greeks, view),
        vega_signal(&inputs.net_greeks, view),
        target_signal(inputs, view),
        income,
        convexity,
        leg_signal(inputs.leg_count),
    ];

    let total: f64 = signals.iter().map(|s| s.contribution).sum();
    let value = (BASE_SCORE + total).clamp(0.0, 100.0).round();

    signals.sort_by(|a, b| b.contribution.total_cmp(&a.contribution));
    let reasons: Vec<String> = signals
        .into_iter()
        .filter(|s| s.contribution >= 1.0)
        .filter_map(|s| s.reason)
        .take(MAX_REASONS)
        .collect();

    let rationale = if reasons.is_empty() {
        "weak match with the view".to_string()
    } else {
        reasons.join("; ")
    };

    Score { value, rationale }
}
