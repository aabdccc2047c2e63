//! Per-group valuation.
//!
//! A group's members are its listed leg ids plus every leg that names the
//! group. Groups never own legs, so a dangling id is an error rather than
//! a silent omission.

use std::collections::{HashMap, HashSet};

use pricer_core::types::MarketState;
use pricer_pricing::greeks::PriceQuote;

use super::aggregator::{quote_leg, NetGreeks};
use crate::portfolio::{GroupId, LegGroup, LegId, PortfolioError, PortfolioLeg, SimulationShock};

/// Value and net Greeks of one leg group.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GroupValuation {
    /// Group identifier
    pub id: GroupId,
    /// Display name
    pub name: String,
    /// Resolved members, in portfolio order
    pub leg_ids: Vec<LegId>,
    /// Σ quantity · price of active members
    pub value: f64,
    /// Σ quantity · Greeks of active members
    pub net_greeks: NetGreeks,
}

/// Values each group under the shock.
///
/// Each leg is priced once even when it belongs to several groups.
/// Inactive members are listed but contribute nothing.
///
/// # Errors
///
/// - `PortfolioError::UnknownLeg` when a group lists an id not in `legs`
/// - `PortfolioError::LegPricing` naming a member that fails to price
pub fn aggregate_groups(
    market: &MarketState,
    legs: &[PortfolioLeg],
    groups: &[LegGroup],
    shock: &SimulationShock,
) -> Result<Vec<GroupValuation>, PortfolioError> {
    let index: HashMap<&LegId, usize> = legs.iter().enumerate().map(|(i, leg)| (&leg.id, i)).collect();
    let mut quotes: HashMap<usize, PriceQuote> = HashMap::new();

    groups
        .iter()
        .map(|group| {
            let mut members: HashSet<usize> = HashSet::new();
            for leg_id in &group.leg_ids {
                let i = index.get(leg_id).ok_or_else(|| PortfolioError::UnknownLeg {
                    group: group.id.clone(),
                    leg_id: leg_id.clone(),
                })?;
                members.insert(*i);
            }
            members.extend(
                legs.iter()
                    .enumerate()
                    .filter(|(_, leg)| leg.group.as_ref() == Some(&group.id))
                    .map(|(i, _)| i),
            );

            let mut ordered: Vec<usize> = members.into_iter().collect();
            ordered.sort_unstable();

            let mut total = PriceQuote::default();
            for &i in &ordered {
                let leg = &legs[i];
                if !leg.active {
                    continue;
                }
                let unit = match quotes.get(&i) {
                    Some(quote) => *quote,
                    None => {
                        let quote = quote_leg(market, leg, shock)?;
                        quotes.insert(i, quote);
                        quote
                    }
                };
                total += unit.scaled(leg.quantity);
            }

            Ok(GroupValuation {
                id: group.id.clone(),
                name: group.name.clone(),
                leg_ids: ordered.iter().map(|&i| legs[i].id.clone()).collect(),
                value: total.price,
                net_greeks: NetGreeks::from(total),
            })
        })
        .collect()
}
