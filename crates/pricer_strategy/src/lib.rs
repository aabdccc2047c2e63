//! # Pricer Strategy (L5: Search)
//!
//! Multi-leg option strategy search driven by a market view.
//!
//! This crate provides:
//! - Market views in percent or target-price form, normalised against spot
//! - Strike ladders sized from the expected move or the one-sigma move
//! - Canonical templates (spreads, butterflies, calendars, straddles, strangles)
//! - Probability of profit under a log-normal terminal distribution
//! - Heuristic scoring with a short rationale per candidate
//! - Background search on the Rayon pool with results on an async channel
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          pricer_strategy (L5)           │
//! ├─────────────────────────────────────────┤
//! │  view/strikes  - View, StrikeLadder    │
//! │  templates     - StrategyTemplate      │
//! │  probability   - POP integration       │
//! │  scoring       - Fit score, rationale  │
//! │  recommend     - Search and ranking    │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │             pricer_risk (L4)            │
//! │  Snapshots, payoff curves, shocks       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::MarketState;
//! use pricer_strategy::params::{Constraints, GenerationParams};
//! use pricer_strategy::view::{Direction, MarketView};
//! use pricer_strategy::{spawn_recommendation, wait_for_recommendation, RecommendationRequest};
//!
//! let request = RecommendationRequest {
//!     market: MarketState::new(100.0, 0.03, 0.0, 0.3),
//!     view: MarketView { direction: Direction::Bearish, move_pct: 4.0, ..Default::default() },
//!     generation: GenerationParams::default(),
//!     constraints: Constraints { defined_risk_only: true, ..Default::default() },
//! };
//!
//! let rx = spawn_recommendation(request);
//! let candidates = wait_for_recommendation(&rx).unwrap();
//! assert!(candidates.iter().all(|c| c.max_loss.is_some()));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod candidate;
pub mod error;
pub mod params;
pub mod probability;
pub mod recommend;
pub mod scoring;
pub mod strikes;
pub mod templates;
pub mod view;

pub use candidate::StrategyCandidate;
pub use error::StrategyError;
pub use recommend::{
    recommend, spawn_recommendation, wait_for_recommendation, RecommendationRequest,
    RecommendationResult,
};
