//! Heatmap command implementation
//!
//! Revalues a portfolio over a two-axis shock grid.

use std::path::Path;

use pricer_core::types::MarketState;
use pricer_risk::portfolio::PortfolioLeg;
use pricer_risk::scenarios::{scenario_grid, ScenarioGrid, ShockAxis};
use serde::Deserialize;
use tracing::info;

use super::{read_request, with_default_methods, write_response};
use crate::config::CliConfig;
use crate::Result;

/// `{ market, legs, xAxis, yAxis }`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapRequest {
    /// Market state
    pub market: MarketState,
    /// Portfolio legs
    pub legs: Vec<PortfolioLeg>,
    /// Column axis
    pub x_axis: ShockAxis,
    /// Row axis
    pub y_axis: ShockAxis,
}

/// Evaluates the grid.
pub fn execute(config: &CliConfig, request: HeatmapRequest) -> Result<ScenarioGrid> {
    request.market.validate()?;
    let legs = with_default_methods(config, request.legs);
    Ok(scenario_grid(
        &request.market,
        &legs,
        &request.x_axis,
        &request.y_axis,
        &config.risk,
    )?)
}

/// Run the heatmap command
pub fn run(config: &CliConfig, request: &Path, output: Option<&Path>) -> Result<()> {
    let request: HeatmapRequest = read_request(request)?;
    info!(
        x = request.x_axis.kind.name(),
        y = request.y_axis.kind.name(),
        cells = request.x_axis.values.len() * request.y_axis.values.len(),
        "evaluating scenario grid"
    );
    let response = execute(config, request)?;
    write_response(&response, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    fn request(y_kind: &str) -> HeatmapRequest {
        serde_json::from_str(&format!(
            r#"{{
                "market": {{"spot": 100.0, "rate": 0.05, "volatility": 0.2}},
                "legs": [{{"id": "c", "instrument": {{"type": "vanilla", "optionType": "call", "strike": 100.0, "expiry": 1.0}}, "quantity": 2.0}}],
                "xAxis": {{"kind": "spotPct", "values": [-10.0, 0.0, 10.0]}},
                "yAxis": {{"kind": "{y_kind}", "values": [0.0, 0.05]}}
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_grid_shape_and_origin() {
        let grid = execute(&CliConfig::default(), request("volAbs")).unwrap();
        assert_eq!(grid.pnl.len(), 2);
        assert!(grid.pnl.iter().all(|row| row.len() == 3));
        assert!(grid.pnl[0][1].abs() < 1e-12);
        assert!(grid.pnl[0][2] > 0.0 && grid.pnl[0][0] < 0.0);
    }

    #[test]
    fn test_duplicate_axis_kind_is_rejected() {
        let err = execute(&CliConfig::default(), request("spotPct")).unwrap_err();
        assert!(matches!(err, CliError::Portfolio(_)));
    }
}
