use crate::domain::entities::bundle::RawBundle;
use crate::domain::entities::card_costs::CardCostReport;
use crate::domain::entities::cost_analysis::CostAnalysis;
use crate::domain::entities::insight::CompetitiveInsight;
use crate::domain::entities::p2p::P2pQuote;
use crate::domain::entities::selection::Selection;
use crate::domain::entities::stablecoin::StablecoinRates;
use crate::domain::values::amount::TransferAmount;
use crate::domain::values::card_premium::{card_premiums, CardPremiumEntry};
use crate::domain::values::corridor::CorridorInfo;
use crate::domain::values::metrics::{derive_metrics, DerivedMetrics};
use crate::domain::values::source_result::{SourceKind, SourceResult};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything presentation needs for one completed, current run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    /// Request token of the run that produced this view.
    pub token: u64,
    pub generated_at: DateTime<Utc>,
    pub selection: Selection,
    pub corridor: CorridorInfo,
    pub request_amount: TransferAmount,
    pub cost_analysis: SourceResult<CostAnalysis>,
    pub metrics: Option<DerivedMetrics>,
    pub insight: SourceResult<CompetitiveInsight>,
    pub p2p: SourceResult<P2pQuote>,
    pub stablecoin: SourceResult<StablecoinRates>,
    pub card_premiums: SourceResult<CardCostReport>,
    pub card_premium_entries: Vec<CardPremiumEntry>,
    pub absent_sources: Vec<SourceKind>,
}

impl ViewModel {
    pub fn is_empty(&self) -> bool {
        self.absent_sources.len() == SourceKind::ALL.len()
    }
}

/// Combine a settled bundle with the metrics derived from it. The bundle is
/// consumed, so a view never shares state with a later run.
pub fn assemble(token: u64, selection: Selection, bundle: RawBundle) -> ViewModel {
    let absent_sources = bundle.absent_sources();
    let metrics = bundle.cost_analysis.as_ref().ok().and_then(derive_metrics);
    let card_premium_entries = bundle
        .card_premiums
        .as_ref()
        .ok()
        .map(card_premiums)
        .unwrap_or_default();

    ViewModel {
        token,
        generated_at: Utc::now(),
        selection,
        corridor: CorridorInfo::from(selection.corridor),
        request_amount: selection.request_amount(),
        cost_analysis: bundle.cost_analysis,
        metrics,
        insight: bundle.insight,
        p2p: bundle.p2p,
        stablecoin: bundle.stablecoin,
        card_premiums: bundle.card_premiums,
        card_premium_entries,
        absent_sources,
    }
}
