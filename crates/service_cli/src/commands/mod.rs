//! CLI command implementations
//!
//! Each submodule reads one JSON request, calls the library crates and
//! writes one JSON response. `execute` functions are pure so they can be
//! tested without touching the filesystem.

pub mod check;
pub mod curve;
pub mod heatmap;
pub mod portfolio;
pub mod price;
pub mod recommend;

use std::path::Path;

use pricer_risk::portfolio::PortfolioLeg;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Parses a JSON request file.
pub fn read_request<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CliError::Request {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes pretty JSON to `output`, or to stdout when absent.
pub fn write_response<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(CliError::Response)?;
    match output {
        Some(path) => {
            std::fs::write(path, json + "\n").map_err(|source| CliError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            debug!(path = %path.display(), "response written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Fills in the configured default method for legs that name none.
pub fn with_default_methods(config: &CliConfig, mut legs: Vec<PortfolioLeg>) -> Vec<PortfolioLeg> {
    for leg in &mut legs {
        if leg.method.is_none() {
            leg.method = Some(config.simulation.method_for(&leg.instrument));
        }
    }
    legs
}
