//! Price command implementation
//!
//! Prices one instrument and reports its Greeks.

use std::path::Path;

use pricer_core::types::MarketState;
use pricer_models::instruments::InstrumentSpec;
use pricer_models::methods::PricingMethod;
use pricer_pricing::greeks::{estimate_with_config, PriceQuote};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{read_request, write_response};
use crate::config::CliConfig;
use crate::Result;

/// `{ market, instrument, method? }`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRequest {
    /// Market state
    pub market: MarketState,
    /// Instrument to price
    pub instrument: InstrumentSpec,
    /// Method; the configured default for the instrument when absent
    #[serde(default)]
    pub method: Option<PricingMethod>,
}

/// Quote with the method that produced it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
    /// Method name
    pub method: &'static str,
    /// Price and Greeks
    #[serde(flatten)]
    pub quote: PriceQuote,
}

/// Prices the request with the configured bump sizes.
pub fn execute(config: &CliConfig, request: PriceRequest) -> Result<PriceResponse> {
    request.market.validate()?;
    let method = config
        .simulation
        .resolve(request.method, &request.instrument);
    let quote = estimate_with_config(&request.market, &request.instrument, &method, &config.bumps)?;
    Ok(PriceResponse {
        method: method.name(),
        quote,
    })
}

/// Run the price command
pub fn run(config: &CliConfig, request: &Path, output: Option<&Path>) -> Result<()> {
    let request: PriceRequest = read_request(request)?;
    info!(instrument = request.instrument.kind(), "pricing instrument");
    let response = execute(config, request)?;
    info!(method = response.method, price = response.quote.price, "pricing complete");
    write_response(&response, output)
}
