use crate::domain::entities::card_costs::CardCostReport;
use crate::domain::entities::cost_analysis::CostAnalysis;
use crate::domain::entities::insight::CompetitiveInsight;
use crate::domain::entities::p2p::P2pQuote;
use crate::domain::entities::stablecoin::StablecoinRates;
use crate::domain::values::source_result::{SourceKind, SourceResult};
use serde::Serialize;

/// Settled results of one aggregation run. Every slot is filled, each one
/// independently present or absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawBundle {
    pub cost_analysis: SourceResult<CostAnalysis>,
    pub insight: SourceResult<CompetitiveInsight>,
    pub p2p: SourceResult<P2pQuote>,
    pub stablecoin: SourceResult<StablecoinRates>,
    pub card_premiums: SourceResult<CardCostReport>,
}

impl RawBundle {
    pub fn all_absent() -> Self {
        Self {
            cost_analysis: SourceResult::Absent,
            insight: SourceResult::Absent,
            p2p: SourceResult::Absent,
            stablecoin: SourceResult::Absent,
            card_premiums: SourceResult::Absent,
        }
    }

    pub fn is_absent(&self, kind: SourceKind) -> bool {
        match kind {
            SourceKind::CostAnalysis => self.cost_analysis.is_absent(),
            SourceKind::Insight => self.insight.is_absent(),
            SourceKind::P2p => self.p2p.is_absent(),
            SourceKind::Stablecoin => self.stablecoin.is_absent(),
            SourceKind::CardPremiums => self.card_premiums.is_absent(),
        }
    }

    pub fn absent_sources(&self) -> Vec<SourceKind> {
        SourceKind::ALL
            .into_iter()
            .filter(|k| self.is_absent(*k))
            .collect()
    }
}
