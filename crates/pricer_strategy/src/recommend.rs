//! Strategy search: build, value, filter and rank template candidates.

use async_channel::Receiver;
use pricer_core::types::MarketState;
use pricer_models::instruments::InstrumentSpec;
use pricer_risk::parallel::try_parallel_map;
use pricer_risk::RiskConfig;
use pricer_risk::portfolio::{PortfolioLeg, SimulationShock};
use pricer_risk::scenarios::{aggregate, mark_to_model, payoff_curve};
use tracing::{debug, warn};

use crate::candidate::StrategyCandidate;
use crate::error::StrategyError;
use crate::params::{Constraints, GenerationParams};
use crate::probability::{probability_of_profit, TerminalDistribution};
use crate::scoring::{score, ScoreInputs};
use crate::strikes::{ladder, StrikeLadder};
use crate::templates::{templates_for, StrategyTemplate, Tenor};
use crate::view::{MarketView, NormalisedView};

/// Most candidates returned by a search.
pub const MAX_CANDIDATES: usize = 5;

/// Lowest leg volatility after the skew adjustment.
pub const MIN_LEG_VOLATILITY: f64 = 0.01;

/// Highest leg volatility after the skew adjustment.
pub const MAX_LEG_VOLATILITY: f64 = 3.0;

/// Everything a search needs, as one message.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RecommendationRequest {
    /// Current market
    pub market: MarketState,
    /// Directional and volatility view
    #[cfg_attr(feature = "serde", serde(default))]
    pub view: MarketView,
    /// Leg construction settings
    #[cfg_attr(feature = "serde", serde(default))]
    pub generation: GenerationParams,
    /// Candidate limits and preferences
    #[cfg_attr(feature = "serde", serde(default))]
    pub constraints: Constraints,
}

/// Result delivered by [`spawn_recommendation`].
pub type RecommendationResult = Result<Vec<StrategyCandidate>, StrategyError>;

/// Skew-adjusted volatility for a strike: `σ − skew·(K−S)/S`, clamped.
pub fn skewed_volatility(market: &MarketState, strike: f64) -> f64 {
    let moneyness = (strike - market.spot) / market.spot;
    (market.volatility - market.skew_or_zero() * moneyness)
        .clamp(MIN_LEG_VOLATILITY, MAX_LEG_VOLATILITY)
}

fn build_legs(
    market: &MarketState,
    template: StrategyTemplate,
    view: &NormalisedView,
    ladder: &StrikeLadder,
    generation: &GenerationParams,
) -> Vec<PortfolioLeg> {
    template
        .legs(view.direction)
        .iter()
        .enumerate()
        .map(|(i, leg)| {
            let strike = ladder.strike(leg.offset);
            let expiry = match leg.tenor {
                Tenor::Near => generation.near_expiry(),
                Tenor::Far => generation.far_expiry(),
            };
            let instrument = InstrumentSpec::Vanilla {
                option_type: leg.option_type,
                strike,
                expiry,
            };
            let id = format!("{}-{}", template.name().to_lowercase().replace(' ', "-"), i + 1);
            let built = PortfolioLeg::new(id, instrument, leg.quantity)
                .with_method(generation.method);
            if market.skew.is_some() {
                built.with_volatility(skewed_volatility(market, strike))
            } else {
                built
            }
        })
        .collect()
}

/// True when every strike lies strictly inside the payoff scan, so the
/// curve sees each kink and its slope beyond.
fn within_scan(market: &MarketState, risk: &RiskConfig, lowest: f64, highest: f64) -> bool {
    let low = market.spot * (1.0 - risk.scan_width);
    let high = market.spot * (1.0 + risk.scan_width);
    lowest > low && highest < high
}

/// Builds and values one template. `Ok(None)` means the template was
/// filtered out.
fn evaluate(
    market: &MarketState,
    template: StrategyTemplate,
    view: &NormalisedView,
    ladder: &StrikeLadder,
    generation: &GenerationParams,
    constraints: &Constraints,
) -> Result<Option<StrategyCandidate>, StrategyError> {
    let (lowest, highest) = template.strike_range(view.direction, ladder);
    if lowest <= 0.0 {
        debug!(template = template.name(), "skipped: non-positive strike");
        return Ok(None);
    }
    if !within_scan(market, &generation.risk, lowest, highest) {
        debug!(
            template = template.name(),
            lowest,
            highest,
            "skipped: strikes outside the payoff scan"
        );
        return Ok(None);
    }

    let legs = build_legs(market, template, view, ladder, generation);
    if legs.len() > constraints.max_legs {
        debug!(
            template = template.name(),
            legs = legs.len(),
            max_legs = constraints.max_legs,
            "skipped: too many legs"
        );
        return Ok(None);
    }

    let snapshot = aggregate(market, &legs, &SimulationShock::default(), &generation.risk)?;
    if !constraints.accepts_loss(snapshot.max_loss) {
        debug!(
            template = template.name(),
            max_loss = ?snapshot.max_loss,
            "skipped: loss outside constraints"
        );
        return Ok(None);
    }

    let days_passed = view.horizon_days.min(generation.expiry_days);
    let horizon = SimulationShock {
        days_passed,
        vol_shock_abs: view.vol_shift,
        ..Default::default()
    };
    let curve = payoff_curve(market, &legs, &horizon, &generation.risk)?;
    let distribution =
        TerminalDistribution::from_market(&horizon.apply_market(market), days_passed / 365.0);
    let pop = probability_of_profit(&curve, &distribution);

    let at_target = SimulationShock {
        spot_shock_pct: view.move_pct,
        ..horizon
    };
    let pnl_at_target = mark_to_model(market, &legs, &at_target)? - snapshot.total_value;

    let fit = score(
        &ScoreInputs {
            net_greeks: snapshot.net_greeks,
            net_premium: snapshot.total_value,
            pnl_at_target,
            max_loss: snapshot.max_loss,
            leg_count: legs.len(),
        },
        view,
        constraints,
    );

    Ok(Some(StrategyCandidate {
        name: template.name().to_string(),
        template,
        legs,
        net_premium: snapshot.total_value,
        net_greeks: snapshot.net_greeks,
        max_profit: snapshot.max_profit,
        max_loss: snapshot.max_loss,
        breakevens: snapshot.breakevens,
        probability_of_profit: pop,
        score: fit.value,
        rationale: fit.rationale,
    }))
}

/// Searches template structures for the view and returns the best
/// [`MAX_CANDIDATES`] by score, highest first.
///
/// Templates are valued in parallel. Ties keep template enumeration order.
///
/// # Errors
///
/// - `StrategyError::Market` for an invalid market state
/// - `StrategyError::InvalidView`, `InvalidGeneration` or
///   `InvalidConstraints` for malformed inputs
/// - `StrategyError::Portfolio` when a candidate leg fails to price
///
/// # Examples
///
/// ```
/// use pricer_core::types::MarketState;
/// use pricer_strategy::params::{Constraints, GenerationParams};
/// use pricer_strategy::view::{Direction, MarketView};
/// use pricer_strategy::recommend;
///
/// let market = MarketState::new(100.0, 0.03, 0.0, 0.25);
/// let view = MarketView { direction: Direction::Bullish, move_pct: 5.0, ..Default::default() };
///
/// let candidates = recommend(&market, &view, &GenerationParams::default(), &Constraints::default()).unwrap();
/// assert!(!candidates.is_empty() && candidates.len() <= 5);
/// assert!(candidates.windows(2).all(|w| w[0].score >= w[1].score));
/// ```
pub fn recommend(
    market: &MarketState,
    view: &MarketView,
    generation: &GenerationParams,
    constraints: &Constraints,
) -> Result<Vec<StrategyCandidate>, StrategyError> {
    market.validate()?;
    generation.validate()?;
    constraints.validate()?;
    let view = view.normalise(market.spot)?;

    let ladder = ladder(market, &view, generation);
    let templates = templates_for(&view, constraints);
    debug!(
        direction = view.direction.as_str(),
        atm = ladder.atm,
        width = ladder.width,
        templates = templates.len(),
        "searching strategies"
    );

    let evaluated = try_parallel_map(&templates, |&template| {
        evaluate(market, template, &view, &ladder, generation, constraints)
    })?;

    let mut candidates: Vec<StrategyCandidate> = evaluated.into_iter().flatten().collect();
    if candidates.is_empty() {
        warn!(
            direction = view.direction.as_str(),
            "no strategy satisfies the constraints"
        );
    }

    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(MAX_CANDIDATES);
    Ok(candidates)
}

/// Runs [`recommend`] on the rayon pool and delivers the result on a
/// single-slot channel.
///
/// Dropping the receiver cancels delivery but not the search.
pub fn spawn_recommendation(request: RecommendationRequest) -> Receiver<RecommendationResult> {
    let (tx, rx) = async_channel::bounded(1);
    rayon::spawn(move || {
        let result = recommend(
            &request.market,
            &request.view,
            &request.generation,
            &request.constraints,
        );
        if tx.send_blocking(result).is_err() {
            debug!("recommendation receiver dropped before delivery");
        }
    });
    rx
}

/// Blocks until a spawned search delivers.
///
/// # Errors
///
/// The search's own error, or `StrategyError::ChannelClosed` when the
/// sender went away without a result.
pub fn wait_for_recommendation(rx: &Receiver<RecommendationResult>) -> RecommendationResult {
    rx.recv_blocking()
        .map_err(|_| StrategyError::ChannelClosed)?
}
