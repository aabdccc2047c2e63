//! Portfolio legs, groups and shocks.
//!
//! Legs are plain values; groups hold leg ids only. Every valuation takes
//! the legs by slice and returns fresh results.

mod error;
mod ids;
mod leg;
mod shock;

pub use error::PortfolioError;
pub use ids::{GroupId, LegId};
pub use leg::{LegGroup, PortfolioLeg};
pub use shock::SimulationShock;
