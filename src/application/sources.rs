//! Source clients: one function per dataset. Each settles to a
//! [`SourceResult`], logging why a source came back absent.

use crate::domain::entities::card_costs::CardCostReport;
use crate::domain::entities::cost_analysis::CostAnalysis;
use crate::domain::entities::insight::CompetitiveInsight;
use crate::domain::entities::p2p::P2pQuote;
use crate::domain::entities::stablecoin::StablecoinRates;
use crate::domain::error::SourceError;
use crate::domain::ports::remittance_api::RemittanceApi;
use crate::domain::values::amount::TransferAmount;
use crate::domain::values::corridor::Corridor;
use crate::domain::values::source_result::{HasRecords, SourceKind, SourceResult};

pub async fn fetch_cost_analysis(
    api: &dyn RemittanceApi,
    corridor: Corridor,
) -> SourceResult<CostAnalysis> {
    settle(
        SourceKind::CostAnalysis,
        corridor,
        api.competitive_analysis(corridor).await,
    )
}

pub async fn fetch_insight(
    api: &dyn RemittanceApi,
    corridor: Corridor,
) -> SourceResult<CompetitiveInsight> {
    settle(
        SourceKind::Insight,
        corridor,
        api.competitive_insight(corridor).await,
    )
}

pub async fn fetch_p2p(
    api: &dyn RemittanceApi,
    corridor: Corridor,
    amount: TransferAmount,
) -> SourceResult<P2pQuote> {
    settle(SourceKind::P2p, corridor, api.p2p_quote(corridor, amount).await)
}

/// Rates are quoted in the corridor's payout currency.
pub async fn fetch_stablecoin(
    api: &dyn RemittanceApi,
    corridor: Corridor,
) -> SourceResult<StablecoinRates> {
    settle(
        SourceKind::Stablecoin,
        corridor,
        api.stablecoin_rates(corridor.currency()).await,
    )
}

pub async fn fetch_card_premiums(
    api: &dyn RemittanceApi,
    corridor: Corridor,
    amount: TransferAmount,
) -> SourceResult<CardCostReport> {
    settle(
        SourceKind::CardPremiums,
        corridor,
        api.card_costs(corridor, amount).await,
    )
}

fn settle<T: HasRecords>(
    kind: SourceKind,
    corridor: Corridor,
    result: Result<T, SourceError>,
) -> SourceResult<T> {
    let err = match result {
        Ok(payload) if payload.has_records() => return SourceResult::Ok(payload),
        Ok(_) => SourceError::NoData("payload has no records".into()),
        Err(e) => e,
    };
    tracing::warn!(source = %kind, corridor = %corridor, error = %err, "source absent");
    SourceResult::Absent
}
