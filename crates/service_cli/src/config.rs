//! CLI configuration management
//!
//! Settings are resolved in priority order (highest first):
//! 1. `-v` flags on the command line (log level only)
//! 2. `PRICER_*` environment variables
//! 3. The TOML configuration file
//! 4. Built-in defaults
//!
//! # Example file
//!
//! ```toml
//! logLevel = "info"
//!
//! [simulation]
//! paths = 20000
//! steps = 100
//! seed = 42
//! latticeSteps = 200
//!
//! [risk]
//! scanWidth = 0.5
//! scanSteps = 100
//!
//! [strategy]
//! strikeStep = 1.0
//! expiryDays = 30.0
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use pricer_models::instruments::InstrumentSpec;
use pricer_models::methods::{
    PricingMethod, SimulationParams, DEFAULT_LATTICE_STEPS, DEFAULT_PATHS, DEFAULT_SEED,
    DEFAULT_STEPS,
};
use pricer_pricing::greeks::BumpConfig;
use pricer_risk::RiskConfig;
use pricer_strategy::params::GenerationParams;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File read when `--config` is not given, if present.
pub const DEFAULT_CONFIG_FILE: &str = "pricer.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// File missing, unreadable or not valid TOML
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Environment override could not be parsed
    #[error("Environment variable {key}: cannot parse {value:?}")]
    EnvError {
        /// Variable name
        key: String,
        /// Raw value
        value: String,
    },

    /// A setting is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything
    Trace,
    /// Per-call detail
    Debug,
    /// Progress messages
    #[default]
    Info,
    /// Fallbacks and rejections
    Warn,
    /// Failures only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Level after `count` verbosity flags: one gives debug, more give trace.
    pub fn raised_by(self, count: u8) -> Self {
        match count {
            0 => self,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// Numerical settings used when a request leaves the method out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulationDefaults {
    /// Monte Carlo paths
    pub paths: usize,
    /// Monte Carlo time steps
    pub steps: usize,
    /// Monte Carlo seed
    pub seed: u64,
    /// Binomial lattice steps
    pub lattice_steps: usize,
}

impl Default for SimulationDefaults {
    fn default() -> Self {
        Self {
            paths: DEFAULT_PATHS,
            steps: DEFAULT_STEPS,
            seed: DEFAULT_SEED,
            lattice_steps: DEFAULT_LATTICE_STEPS,
        }
    }
}

impl SimulationDefaults {
    /// Preferred method for the instrument, carrying these settings.
    pub fn method_for(&self, instrument: &InstrumentSpec) -> PricingMethod {
        let params = SimulationParams {
            paths: self.paths,
            steps: self.steps,
            seed: self.seed,
        };
        match PricingMethod::default_for(instrument) {
            PricingMethod::BinomialLattice { .. } => PricingMethod::BinomialLattice {
                steps: self.lattice_steps,
            },
            PricingMethod::McBridge(_) => PricingMethod::McBridge(params),
            PricingMethod::McDiscrete(_) => PricingMethod::McDiscrete(params),
            other => other,
        }
    }

    /// The requested method, or the configured default for the instrument.
    pub fn resolve(&self, method: Option<PricingMethod>, instrument: &InstrumentSpec) -> PricingMethod {
        method.unwrap_or_else(|| self.method_for(instrument))
    }
}

/// Strategy search defaults used when a request has no `generation` block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StrategyDefaults {
    /// Leg pricing method
    pub method: PricingMethod,
    /// Strike grid increment
    pub strike_step: f64,
    /// Near expiry in calendar days
    pub expiry_days: f64,
    /// Far expiry in calendar days
    pub long_expiry_days: f64,
}

impl Default for StrategyDefaults {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            method: params.method,
            strike_step: params.strike_step,
            expiry_days: params.expiry_days,
            long_expiry_days: params.long_expiry_days,
        }
    }
}

impl StrategyDefaults {
    /// Generation parameters with these defaults and the given risk settings.
    pub fn generation(&self, risk: &RiskConfig) -> GenerationParams {
        GenerationParams {
            method: self.method,
            strike_step: self.strike_step,
            expiry_days: self.expiry_days,
            long_expiry_days: self.long_expiry_days,
            width_pct: None,
            risk: *risk,
        }
    }
}

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Default numerical methods
    pub simulation: SimulationDefaults,
    /// Finite-difference bump sizes
    pub bumps: BumpConfig,
    /// Payoff scan and VaR settings
    pub risk: RiskConfig,
    /// Strategy search defaults
    pub strategy: StrategyDefaults,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            ConfigError::FileError(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Overrides settings from `PRICER_*` environment variables.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Overrides settings from a variable lookup.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("PRICER_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        override_from(&lookup, "PRICER_MC_PATHS", &mut self.simulation.paths)?;
        override_from(&lookup, "PRICER_MC_STEPS", &mut self.simulation.steps)?;
        override_from(&lookup, "PRICER_MC_SEED", &mut self.simulation.seed)?;
        override_from(&lookup, "PRICER_LATTICE_STEPS", &mut self.simulation.lattice_steps)?;
        override_from(&lookup, "PRICER_VAR_Z", &mut self.risk.var_z)?;
        override_from(&lookup, "PRICER_SCAN_WIDTH", &mut self.risk.scan_width)?;
        override_from(&lookup, "PRICER_SCAN_STEPS", &mut self.risk.scan_steps)?;
        override_from(&lookup, "PRICER_STRIKE_STEP", &mut self.strategy.strike_step)?;
        override_from(&lookup, "PRICER_EXPIRY_DAYS", &mut self.strategy.expiry_days)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sim = &self.simulation;
        if sim.paths == 0 || sim.steps == 0 || sim.lattice_steps == 0 {
            return Err(ConfigError::Invalid(
                "simulation paths, steps and latticeSteps must be positive".to_string(),
            ));
        }
        self.bumps
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        self.risk
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        self.strategy
            .generation(&self.risk)
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Build configuration from all sources.
    ///
    /// An explicit path must exist; otherwise [`DEFAULT_CONFIG_FILE`] is
    /// read when present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::FileError(e.to_string()))
    }
}

fn override_from<F, T>(lookup: &F, key: &str, target: &mut T) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(value) = lookup(key) {
        *target = value.trim().parse().map_err(|_| ConfigError::EnvError {
            key: key.to_string(),
            value,
        })?;
    }
    Ok(())
}
