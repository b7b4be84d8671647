use crate::domain::entities::card_costs::CardCostReport;
use crate::domain::entities::cost_analysis::CostAnalysis;
use crate::domain::entities::health::HealthStatus;
use crate::domain::entities::insight::CompetitiveInsight;
use crate::domain::entities::p2p::P2pQuote;
use crate::domain::entities::stablecoin::StablecoinRates;
use crate::domain::error::SourceError;
use crate::domain::values::amount::TransferAmount;
use crate::domain::values::corridor::Corridor;
use async_trait::async_trait;

/// Read-only access to the remote comparison service, one method per
/// endpoint. Implementations return normalized payloads and never retry.
#[async_trait]
pub trait RemittanceApi: Send + Sync {
    async fn competitive_analysis(&self, corridor: Corridor) -> Result<CostAnalysis, SourceError>;

    async fn competitive_insight(
        &self,
        corridor: Corridor,
    ) -> Result<CompetitiveInsight, SourceError>;

    async fn p2p_quote(
        &self,
        corridor: Corridor,
        amount: TransferAmount,
    ) -> Result<P2pQuote, SourceError>;

    /// Stablecoin rates quoted in `currency` (ISO 4217).
    async fn stablecoin_rates(&self, currency: &str) -> Result<StablecoinRates, SourceError>;

    async fn card_costs(
        &self,
        corridor: Corridor,
        amount: TransferAmount,
    ) -> Result<CardCostReport, SourceError>;

    async fn health(&self) -> Result<HealthStatus, SourceError>;
}
