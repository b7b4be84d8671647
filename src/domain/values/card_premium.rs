//! Card-funding premiums relative to the same provider's bank transfer.
//!
//! `premium_pct = (card_cost - bank_cost) / bank_cost * 100`. A negative
//! premium (card cheaper than bank) is reported as is. A zero bank cost has
//! no defined premium and yields `None`.

use crate::domain::entities::card_costs::{CardCostReport, ProviderCardCosts};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardPremiumEntry {
    pub provider: String,
    pub bank_transfer_cost: Decimal,
    pub debit_cost: Decimal,
    pub debit_premium_pct: Option<Decimal>,
    pub credit_cost: Decimal,
    pub credit_premium_pct: Option<Decimal>,
}

pub fn premium_pct(method_cost: Decimal, bank_cost: Decimal) -> Option<Decimal> {
    if bank_cost.is_zero() {
        return None;
    }
    (method_cost - bank_cost)
        .checked_div(bank_cost)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
}

pub fn premium_entry(costs: &ProviderCardCosts) -> CardPremiumEntry {
    CardPremiumEntry {
        provider: costs.provider.clone(),
        bank_transfer_cost: costs.bank_transfer_cost,
        debit_cost: costs.debit_cost,
        debit_premium_pct: premium_pct(costs.debit_cost, costs.bank_transfer_cost),
        credit_cost: costs.credit_cost,
        credit_premium_pct: premium_pct(costs.credit_cost, costs.bank_transfer_cost),
    }
}

/// One entry per provider, cheapest debit premium first. Providers without a
/// defined premium sort last; ties fall back to provider name.
pub fn card_premiums(report: &CardCostReport) -> Vec<CardPremiumEntry> {
    let mut entries: Vec<CardPremiumEntry> = report.providers.iter().map(premium_entry).collect();
    entries.sort_by(|a, b| {
        match (a.debit_premium_pct, b.debit_premium_pct) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }
        .then_with(|| a.provider.cmp(&b.provider))
    });
    entries
}
