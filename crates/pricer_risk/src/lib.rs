//! # Pricer Risk (L4: Application)
//!
//! Portfolio aggregation and what-if analysis over priced legs.
//!
//! This crate provides:
//! - Portfolio legs with signed quantities, activity flags and weak group references
//! - Simulation shocks on spot, volatility, rate and elapsed time
//! - Snapshots: net value, net Greeks and a parametric VaR proxy
//! - Payoff curves with breakeven and extremum detection
//! - Two-axis scenario grids evaluated in parallel with Rayon
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  portfolio/  - Leg, LegGroup, Shock    │
//! │  scenarios/  - Snapshot, payoff, grid  │
//! │  parallel/   - Rayon utilities         │
//! │  config      - RiskConfig              │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_pricing (L3)           │
//! │  Kernel dispatch and Greeks estimation  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Error Policy
//!
//! A leg that cannot be priced fails the whole valuation with
//! [`PortfolioError::LegPricing`](portfolio::PortfolioError::LegPricing)
//! naming the leg. Nothing is silently valued at zero.
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::MarketState;
//! use pricer_models::instruments::{InstrumentSpec, OptionType};
//! use pricer_risk::portfolio::{PortfolioLeg, SimulationShock};
//! use pricer_risk::{aggregate, RiskConfig};
//!
//! let market = MarketState::new(100.0, 0.05, 0.0, 0.2);
//! let leg = |option_type| InstrumentSpec::Vanilla { option_type, strike: 100.0, expiry: 1.0 };
//! let straddle = vec![
//!     PortfolioLeg::new("call", leg(OptionType::Call), 1.0),
//!     PortfolioLeg::new("put", leg(OptionType::Put), 1.0),
//! ];
//!
//! let snapshot = aggregate(&market, &straddle, &SimulationShock::default(), &RiskConfig::default()).unwrap();
//! assert_eq!(snapshot.breakevens.len(), 2);
//! assert!(snapshot.max_loss.is_some());
//! assert!(snapshot.max_profit.is_none());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod parallel;
pub mod portfolio;
pub mod scenarios;

pub use config::RiskConfig;
pub use scenarios::{
    aggregate, aggregate_groups, payoff_curve, scenario_grid, var_proxy, NetGreeks,
    PortfolioSnapshot,
};
