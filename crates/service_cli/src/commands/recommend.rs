//! Recommend command implementation
//!
//! Runs the strategy search in the background and waits for the ranked list.

use std::path::Path;

use pricer_core::types::MarketState;
use pricer_strategy::params::{Constraints, GenerationParams};
use pricer_strategy::view::MarketView;
use pricer_strategy::{
    spawn_recommendation, wait_for_recommendation, RecommendationRequest, StrategyCandidate,
};
use serde::Deserialize;
use tracing::info;

use super::{read_request, write_response};
use crate::config::CliConfig;
use crate::Result;

/// `{ market, view, constraints?, generation? }`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    /// Market state
    pub market: MarketState,
    /// Market view
    #[serde(default)]
    pub view: MarketView,
    /// Candidate limits
    #[serde(default)]
    pub constraints: Constraints,
    /// Generation settings; the configured strategy defaults when absent
    #[serde(default)]
    pub generation: Option<GenerationParams>,
}

impl RecommendRequest {
    /// Search request with configuration defaults filled in.
    pub fn resolve(self, config: &CliConfig) -> RecommendationRequest {
        RecommendationRequest {
            market: self.market,
            view: self.view,
            generation: self
                .generation
                .unwrap_or_else(|| config.strategy.generation(&config.risk)),
            constraints: self.constraints,
        }
    }
}

/// Runs the search and returns the ranked candidates.
pub fn execute(config: &CliConfig, request: RecommendRequest) -> Result<Vec<StrategyCandidate>> {
    let rx = spawn_recommendation(request.resolve(config));
    Ok(wait_for_recommendation(&rx)?)
}

/// Run the recommend command
pub fn run(config: &CliConfig, request: &Path, output: Option<&Path>) -> Result<()> {
    let request: RecommendRequest = read_request(request)?;
    info!(
        direction = request.view.direction.as_str(),
        spot = request.market.spot,
        "searching strategies"
    );
    let candidates = execute(config, request)?;
    match candidates.first() {
        Some(best) => info!(count = candidates.len(), best = %best.name, score = best.score, "search complete"),
        None => info!("search complete: no candidate satisfies the constraints"),
    }
    write_response(&candidates, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use pricer_strategy::StrategyError;

    fn request(json: &str) -> RecommendRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_configured_defaults_fill_generation() {
        let mut config = CliConfig::default();
        config.strategy.strike_step = 5.0;
        config.risk.scan_steps = 60;

        let resolved = request(r#"{"market": {"spot": 100.0, "rate": 0.03, "volatility": 0.25}}"#)
            .resolve(&config);
        assert_eq!(resolved.generation.strike_step, 5.0);
        assert_eq!(resolved.generation.risk.scan_steps, 60);
    }

    #[test]
    fn test_bullish_search_with_step_five() {
        let mut config = CliConfig::default();
        config.strategy.strike_step = 5.0;
        let candidates = execute(
            &config,
            request(
                r#"{"market": {"spot": 102.0, "rate": 0.03, "volatility": 0.25},
                    "view": {"direction": "bullish", "movePct": 5.0},
                    "constraints": {"definedRiskOnly": true}}"#,
            ),
        )
        .unwrap();

        assert!(!candidates.is_empty());
        for leg in candidates.iter().flat_map(|c| &c.legs) {
            let strike = leg.instrument.strike();
            assert_eq!(strike % 5.0, 0.0);
        }
    }

    #[test]
    fn test_view_errors_surface() {
        let err = execute(
            &CliConfig::default(),
            request(
                r#"{"market": {"spot": 100.0, "rate": 0.03, "volatility": 0.25},
                    "view": {"direction": "bearish", "moveMode": "target", "targetPrice": 120.0}}"#,
            ),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Strategy(StrategyError::InvalidView(_))));
    }
}
