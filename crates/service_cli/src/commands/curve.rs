//! Curve command implementation
//!
//! Scans the payoff of a portfolio across spot.

use std::path::Path;

use pricer_risk::scenarios::{find_breakevens, find_extrema, payoff_curve, PayoffPoint};
use serde::Serialize;
use tracing::info;

use super::portfolio::PortfolioRequest;
use super::{read_request, with_default_methods, write_response};
use crate::config::CliConfig;
use crate::Result;

/// Scanned curve with its breakevens and extrema.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveResponse {
    /// Expiry and horizon P&L per scanned spot
    pub points: Vec<PayoffPoint>,
    /// Expiry breakevens, ascending
    pub breakevens: Vec<f64>,
    /// Largest expiry profit, if bounded
    pub max_profit: Option<f64>,
    /// Largest expiry loss, if bounded
    pub max_loss: Option<f64>,
}

/// Scans the request's legs. Groups in the request are ignored.
pub fn execute(config: &CliConfig, request: PortfolioRequest) -> Result<CurveResponse> {
    request.market.validate()?;
    let legs = with_default_methods(config, request.legs);
    let curve = payoff_curve(&request.market, &legs, &request.simulation, &config.risk)?;
    let breakevens = find_breakevens(&curve);
    let extrema = find_extrema(&curve, config.risk.extremum_tolerance);
    Ok(CurveResponse {
        points: curve.points,
        breakevens,
        max_profit: extrema.max_profit,
        max_loss: extrema.max_loss,
    })
}

/// Run the curve command
pub fn run(config: &CliConfig, request: &Path, output: Option<&Path>) -> Result<()> {
    let request: PortfolioRequest = read_request(request)?;
    info!(legs = request.legs.len(), steps = config.risk.scan_steps, "scanning payoff");
    let response = execute(config, request)?;
    write_response(&response, output)
}
