use super::config::ClientConfig;
use super::wire::{
    CardPremiumsResponse, CompetitiveAnalysisResponse, CryptoRatesResponse, InsightResponse,
    P2pResponse,
};
use crate::domain::entities::card_costs::CardCostReport;
use crate::domain::entities::cost_analysis::CostAnalysis;
use crate::domain::entities::health::HealthStatus;
use crate::domain::entities::insight::CompetitiveInsight;
use crate::domain::entities::p2p::P2pQuote;
use crate::domain::entities::stablecoin::StablecoinRates;
use crate::domain::error::{DomainError, SourceError};
use crate::domain::ports::remittance_api::RemittanceApi;
use crate::domain::values::amount::TransferAmount;
use crate::domain::values::corridor::Corridor;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// [`RemittanceApi`] over HTTP with reqwest. One GET per call, no retry.
pub struct HttpRemittanceApi {
    client: Client,
    config: ClientConfig,
}

impl HttpRemittanceApi {
    pub fn new(config: ClientConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, SourceError> {
        let url = self.config.endpoint(path);

        let resp = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| SourceError::Unavailable(format!("GET {path}: {e}")))?;

        if !resp.status().is_success() {
            return Err(SourceError::Unavailable(format!(
                "GET {path} returned {}",
                resp.status()
            )));
        }

        resp.json::<T>()
            .await
            .map_err(|e| SourceError::Unavailable(format!("GET {path}: undecodable body: {e}")))
    }
}

#[async_trait]
impl RemittanceApi for HttpRemittanceApi {
    async fn competitive_analysis(&self, corridor: Corridor) -> Result<CostAnalysis, SourceError> {
        let path = format!("/api/v1/competitive-analysis/{}", corridor.code());
        self.get_json::<CompetitiveAnalysisResponse>(&path, &[])
            .await?
            .into_domain()
    }

    async fn competitive_insight(
        &self,
        corridor: Corridor,
    ) -> Result<CompetitiveInsight, SourceError> {
        let path = format!("/api/v1/rag/competitive-insight/{}", corridor.code());
        self.get_json::<InsightResponse>(&path, &[])
            .await?
            .into_domain()
    }

    async fn p2p_quote(
        &self,
        corridor: Corridor,
        amount: TransferAmount,
    ) -> Result<P2pQuote, SourceError> {
        let path = format!("/api/v1/binance-p2p/{}", corridor.code());
        self.get_json::<P2pResponse>(&path, &[("amount", amount.to_string())])
            .await?
            .into_domain()
    }

    async fn stablecoin_rates(&self, currency: &str) -> Result<StablecoinRates, SourceError> {
        self.get_json::<CryptoRatesResponse>(
            "/api/v1/crypto-rates",
            &[("currencies", currency.to_string())],
        )
        .await?
        .into_domain()
    }

    async fn card_costs(
        &self,
        corridor: Corridor,
        amount: TransferAmount,
    ) -> Result<CardCostReport, SourceError> {
        let path = format!("/api/v1/card-premiums/{}", corridor.code());
        self.get_json::<CardPremiumsResponse>(&path, &[("amount", amount.to_string())])
            .await?
            .into_domain()
    }

    async fn health(&self) -> Result<HealthStatus, SourceError> {
        self.get_json::<HealthStatus>("/health", &[]).await
    }
}
