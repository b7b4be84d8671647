//! Shared test helpers: an in-memory `RemittanceApi` with per-source failure
//! switches and per-corridor latency.

#![allow(dead_code)]

use async_trait::async_trait;
use remitlens::domain::entities::card_costs::{CardCostReport, ProviderCardCosts};
use remitlens::domain::entities::cost_analysis::{CostAnalysis, ProviderCostStat};
use remitlens::domain::entities::health::HealthStatus;
use remitlens::domain::entities::insight::{CompetitiveInsight, InsightMetadata};
use remitlens::domain::entities::p2p::P2pQuote;
use remitlens::domain::entities::stablecoin::{StablecoinRate, StablecoinRates};
use remitlens::domain::error::SourceError;
use remitlens::domain::ports::remittance_api::RemittanceApi;
use remitlens::domain::values::amount::TransferAmount;
use remitlens::domain::values::corridor::Corridor;
use remitlens::domain::values::source_result::SourceKind;
use remitlens::RemitLens;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One recorded request: which source, and the key it was asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub kind: SourceKind,
    pub key: String,
    pub amount: Option<Decimal>,
}

#[derive(Default)]
pub struct FakeApi {
    failing: HashSet<SourceKind>,
    empty: HashSet<SourceKind>,
    delays: HashMap<Corridor, Duration>,
    calls: Mutex<Vec<Call>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `kind` fail with a transport error.
    pub fn failing(mut self, kind: SourceKind) -> Self {
        self.failing.insert(kind);
        self
    }

    /// Make `kind` answer successfully but with no records.
    pub fn empty(mut self, kind: SourceKind) -> Self {
        self.empty.insert(kind);
        self
    }

    pub fn delayed(mut self, corridor: Corridor, delay: Duration) -> Self {
        self.delays.insert(corridor, delay);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    async fn enter(
        &self,
        kind: SourceKind,
        corridor: Corridor,
        key: &str,
        amount: Option<TransferAmount>,
    ) -> Result<(), SourceError> {
        self.calls.lock().unwrap().push(Call {
            kind,
            key: key.to_string(),
            amount: amount.map(|a| a.value()),
        });
        if let Some(delay) = self.delays.get(&corridor) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(&kind) {
            return Err(SourceError::Unavailable(format!("{kind} is down")));
        }
        Ok(())
    }

    fn is_empty(&self, kind: SourceKind) -> bool {
        self.empty.contains(&kind)
    }
}

pub fn wise_remitly() -> Vec<ProviderCostStat> {
    vec![
        ProviderCostStat::new("Remitly", dec!(17.46), dec!(3.99), dec!(15.00), 12),
        ProviderCostStat::new("Wise", dec!(18.27), dec!(6.20), dec!(12.50), 9),
    ]
}

#[async_trait]
impl RemittanceApi for FakeApi {
    async fn competitive_analysis(&self, corridor: Corridor) -> Result<CostAnalysis, SourceError> {
        self.enter(SourceKind::CostAnalysis, corridor, corridor.code(), None)
            .await?;
        let providers = if self.is_empty(SourceKind::CostAnalysis) {
            vec![]
        } else {
            wise_remitly()
        };
        Ok(CostAnalysis {
            data_points: providers.iter().map(|p| p.sample_size).sum(),
            providers,
        })
    }

    async fn competitive_insight(
        &self,
        corridor: Corridor,
    ) -> Result<CompetitiveInsight, SourceError> {
        self.enter(SourceKind::Insight, corridor, corridor.code(), None)
            .await?;
        let analysis = if self.is_empty(SourceKind::Insight) {
            String::new()
        } else {
            format!("Analysis for {}", corridor.code())
        };
        Ok(CompetitiveInsight {
            analysis,
            metadata: Some(InsightMetadata {
                model: Some("test-model".into()),
                total_tokens: Some(120),
                query_number: Some(1),
            }),
        })
    }

    async fn p2p_quote(
        &self,
        corridor: Corridor,
        amount: TransferAmount,
    ) -> Result<P2pQuote, SourceError> {
        self.enter(SourceKind::P2p, corridor, corridor.code(), Some(amount))
            .await?;
        let rate = if self.is_empty(SourceKind::P2p) {
            Decimal::ZERO
        } else {
            dec!(18.95)
        };
        Ok(P2pQuote {
            exchange_rate: rate,
            recipient_receives: Some(rate * amount.value()),
            fee: Decimal::ZERO,
            payment_methods: vec!["SPEI".into()],
        })
    }

    async fn stablecoin_rates(&self, currency: &str) -> Result<StablecoinRates, SourceError> {
        let corridor = Corridor::ALL
            .into_iter()
            .find(|c| c.currency() == currency)
            .unwrap_or_default();
        self.enter(SourceKind::Stablecoin, corridor, currency, None)
            .await?;
        let rates = if self.is_empty(SourceKind::Stablecoin) {
            vec![]
        } else {
            vec![StablecoinRate {
                coin: "USDT".into(),
                currency: currency.to_string(),
                rate: Some(dec!(20.41)),
                source: "binance".into(),
            }]
        };
        Ok(StablecoinRates { rates })
    }

    async fn card_costs(
        &self,
        corridor: Corridor,
        amount: TransferAmount,
    ) -> Result<CardCostReport, SourceError> {
        self.enter(SourceKind::CardPremiums, corridor, corridor.code(), Some(amount))
            .await?;
        let providers = if self.is_empty(SourceKind::CardPremiums) {
            vec![]
        } else {
            vec![ProviderCardCosts {
                provider: "Wise".into(),
                bank_transfer_cost: dec!(10.00),
                debit_cost: dec!(10.80),
                credit_cost: dec!(12.00),
            }]
        };
        Ok(CardCostReport {
            amount: Some(amount.value()),
            providers,
        })
    }

    async fn health(&self) -> Result<HealthStatus, SourceError> {
        Ok(HealthStatus {
            status: "healthy".into(),
            timestamp: None,
        })
    }
}

pub fn setup(api: FakeApi) -> (RemitLens, Arc<FakeApi>) {
    let api = Arc::new(api);
    (RemitLens::with_api(api.clone()), api)
}
