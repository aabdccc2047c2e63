//! Portfolio valuation and what-if analysis.
//!
//! - [`aggregate`]: net value, Greeks, VaR proxy and payoff statistics
//! - [`payoff_curve`], [`find_breakevens`], [`find_extrema`]: spot scan
//! - [`scenario_grid`]: two-axis P&L heatmap
//! - [`aggregate_groups`]: value and Greeks per leg group

mod aggregator;
mod grid;
mod groups;
mod payoff;
mod var;

pub use aggregator::{aggregate, mark_to_model, LegValuation, NetGreeks, PortfolioSnapshot};
pub use grid::{scenario_grid, AxisKind, ScenarioGrid, ShockAxis};
pub use groups::{aggregate_groups, GroupValuation};
pub use payoff::{find_breakevens, find_extrema, payoff_curve, Extrema, PayoffCurve, PayoffPoint};
pub use var::var_proxy;
