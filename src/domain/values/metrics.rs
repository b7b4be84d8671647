//! Competitive metrics over a corridor's provider cost statistics.
//!
//! Everything here is a pure function of an immutable [`CostAnalysis`]
//! snapshot:
//! - `ranked_providers`: ascending by `total_cost`, ties by provider name
//! - `cheapest`: the first ranked provider
//! - `price_gap`: `max(total_cost) - min(total_cost)`
//! - `market_average`: arithmetic mean of `total_cost`

use crate::domain::entities::cost_analysis::{CostAnalysis, ProviderCostStat};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub cheapest: ProviderCostStat,
    pub market_average: Decimal,
    pub price_gap: Decimal,
    pub ranked_providers: Vec<ProviderCostStat>,
}

/// Compute metrics for the providers in `analysis`.
///
/// Returns `None` when there are no providers, or when the costs are so large
/// that the sum or the gap would overflow `Decimal`.
pub fn derive_metrics(analysis: &CostAnalysis) -> Option<DerivedMetrics> {
    let ranked = rank_providers(&analysis.providers);
    let cheapest = ranked.first()?.clone();
    let most_expensive = ranked.last()?;

    let count = Decimal::from(ranked.len());
    let total = ranked
        .iter()
        .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(p.total_cost))?;
    let market_average = total.checked_div(count)?;
    let price_gap = most_expensive.total_cost.checked_sub(cheapest.total_cost)?;

    Some(DerivedMetrics {
        cheapest,
        market_average,
        price_gap,
        ranked_providers: ranked,
    })
}

/// Providers sorted by total cost, ties broken by name so the order is
/// deterministic regardless of how the source listed them.
pub fn rank_providers(providers: &[ProviderCostStat]) -> Vec<ProviderCostStat> {
    let mut ranked = providers.to_vec();
    ranked.sort_by(|a, b| {
        a.total_cost
            .cmp(&b.total_cost)
            .then_with(|| a.provider.cmp(&b.provider))
    });
    ranked
}
