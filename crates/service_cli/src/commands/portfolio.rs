//! Portfolio command implementation
//!
//! Aggregates a portfolio into a snapshot, with optional group rollups.

use std::path::Path;

use pricer_core::types::MarketState;
use pricer_risk::portfolio::{LegGroup, PortfolioLeg, SimulationShock};
use pricer_risk::scenarios::{aggregate, aggregate_groups, GroupValuation, PortfolioSnapshot};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{read_request, with_default_methods, write_response};
use crate::config::CliConfig;
use crate::Result;

/// `{ market, legs, simulation?, groups? }`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioRequest {
    /// Market state
    pub market: MarketState,
    /// Portfolio legs
    pub legs: Vec<PortfolioLeg>,
    /// What-if shock; none when absent
    #[serde(default)]
    pub simulation: SimulationShock,
    /// Leg groups to roll up
    #[serde(default)]
    pub groups: Vec<LegGroup>,
}

/// Snapshot plus group rollups.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioResponse {
    /// Portfolio snapshot
    #[serde(flatten)]
    pub snapshot: PortfolioSnapshot,
    /// Per-group value and Greeks
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupValuation>,
}

/// Values the portfolio under the configured risk settings.
pub fn execute(config: &CliConfig, request: PortfolioRequest) -> Result<PortfolioResponse> {
    request.market.validate()?;
    let legs = with_default_methods(config, request.legs);
    let snapshot = aggregate(&request.market, &legs, &request.simulation, &config.risk)?;
    let groups = aggregate_groups(&request.market, &legs, &request.groups, &request.simulation)?;
    Ok(PortfolioResponse { snapshot, groups })
}

/// Run the portfolio command
pub fn run(config: &CliConfig, request: &Path, output: Option<&Path>) -> Result<()> {
    let request: PortfolioRequest = read_request(request)?;
    info!(legs = request.legs.len(), shocked = !request.simulation.is_zero(), "aggregating portfolio");
    let response = execute(config, request)?;
    info!(
        total_value = response.snapshot.total_value,
        var95 = response.snapshot.var95,
        "portfolio aggregated"
    );
    write_response(&response, output)
}
