//! Response bodies of the remote service and their normalization.
//!
//! The service has shipped a few shapes over time (payloads wrapped in
//! `data` or `numerical_analysis`, or left at the top level), so each body
//! accepts both and normalization picks whichever is populated.

use crate::domain::entities::card_costs::{CardCostReport, ProviderCardCosts};
use crate::domain::entities::cost_analysis::{CostAnalysis, ProviderCostStat};
use crate::domain::entities::insight::{CompetitiveInsight, InsightMetadata};
use crate::domain::entities::p2p::P2pQuote;
use crate::domain::entities::stablecoin::{StablecoinRate, StablecoinRates};
use crate::domain::error::SourceError;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
pub struct CompetitiveAnalysisResponse {
    #[serde(default)]
    numerical_analysis: Option<CompetitiveAnalysisBody>,
    #[serde(flatten)]
    body: CompetitiveAnalysisBody,
}

#[derive(Debug, Default, Deserialize)]
struct CompetitiveAnalysisBody {
    #[serde(default)]
    stats_by_provider: Option<BTreeMap<String, ProviderStatsWire>>,
    #[serde(default)]
    data_points: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ProviderStatsWire {
    avg_rate: Decimal,
    avg_fee: Decimal,
    total_cost: Decimal,
    #[serde(default)]
    sample_size: u64,
}

impl CompetitiveAnalysisResponse {
    pub fn into_domain(self) -> Result<CostAnalysis, SourceError> {
        let body = match self.numerical_analysis {
            Some(nested) if nested.stats_by_provider.is_some() => nested,
            _ => self.body,
        };

        let stats = body
            .stats_by_provider
            .filter(|s| !s.is_empty())
            .ok_or_else(|| SourceError::NoData("no provider statistics".into()))?;

        let providers: Vec<ProviderCostStat> = stats
            .into_iter()
            .map(|(name, s)| {
                ProviderCostStat::new(name, s.avg_rate, s.avg_fee, s.total_cost, s.sample_size)
            })
            .collect();

        let data_points = body
            .data_points
            .unwrap_or_else(|| providers.iter().map(|p| p.sample_size).sum());

        Ok(CostAnalysis {
            providers,
            data_points,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct InsightResponse {
    #[serde(default)]
    strategic_analysis: Option<String>,
    #[serde(default)]
    metadata: Option<InsightMetadataWire>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InsightMetadataWire {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    total_tokens: Option<u64>,
    #[serde(default)]
    query_number: Option<u64>,
}

impl InsightResponse {
    pub fn into_domain(self) -> Result<CompetitiveInsight, SourceError> {
        let analysis = match self.strategic_analysis {
            Some(a) if !a.trim().is_empty() => a,
            _ => {
                return Err(SourceError::NoData(
                    self.error.unwrap_or_else(|| "empty strategic analysis".into()),
                ))
            }
        };

        Ok(CompetitiveInsight {
            analysis,
            metadata: self.metadata.map(|m| InsightMetadata {
                model: m.model,
                total_tokens: m.total_tokens,
                query_number: m.query_number,
            }),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct P2pResponse {
    #[serde(default)]
    data: Option<P2pBody>,
    #[serde(flatten)]
    body: P2pBody,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct P2pBody {
    #[serde(default)]
    exchange_rate: Option<Decimal>,
    #[serde(default)]
    recipient_receives: Option<Decimal>,
    #[serde(default)]
    fee: Option<Decimal>,
    #[serde(default)]
    payment_methods: Vec<PaymentMethodWire>,
}

#[derive(Debug, Deserialize)]
struct PaymentMethodWire {
    #[serde(default, rename = "tradeMethodName")]
    trade_method_name: Option<String>,
    #[serde(default, rename = "payType")]
    pay_type: Option<String>,
}

impl P2pResponse {
    pub fn into_domain(self) -> Result<P2pQuote, SourceError> {
        let body = match self.data {
            Some(nested) if nested.exchange_rate.is_some() => nested,
            _ => self.body,
        };

        let exchange_rate = body.exchange_rate.ok_or_else(|| {
            SourceError::NoData(self.error.unwrap_or_else(|| "no P2P offers".into()))
        })?;

        let payment_methods = body
            .payment_methods
            .into_iter()
            .filter_map(|pm| pm.trade_method_name.or(pm.pay_type))
            .filter(|name| !name.is_empty())
            .collect();

        Ok(P2pQuote {
            exchange_rate,
            recipient_receives: body.recipient_receives,
            fee: body.fee.unwrap_or(Decimal::ZERO),
            payment_methods,
        })
    }
}

type RatesByCoin = BTreeMap<String, BTreeMap<String, RateWire>>;

#[derive(Debug, Deserialize)]
pub struct CryptoRatesResponse {
    #[serde(default)]
    data: Option<CryptoRatesBody>,
    #[serde(default)]
    rates: Option<RatesByCoin>,
}

#[derive(Debug, Deserialize)]
struct CryptoRatesBody {
    #[serde(default)]
    rates: Option<RatesByCoin>,
}

#[derive(Debug, Deserialize)]
struct RateWire {
    #[serde(default)]
    rate: Option<Decimal>,
    #[serde(default)]
    source: Option<String>,
}

impl CryptoRatesResponse {
    pub fn into_domain(self) -> Result<StablecoinRates, SourceError> {
        let by_coin = self
            .data
            .and_then(|d| d.rates)
            .or(self.rates)
            .unwrap_or_default();

        let rates: Vec<StablecoinRate> = by_coin
            .into_iter()
            .flat_map(|(coin, by_currency)| {
                by_currency.into_iter().map(move |(currency, r)| StablecoinRate {
                    coin: coin.clone(),
                    currency,
                    rate: r.rate,
                    source: r.source.unwrap_or_else(|| "unknown".into()),
                })
            })
            .collect();

        if rates.is_empty() {
            return Err(SourceError::NoData("no stablecoin rates".into()));
        }
        Ok(StablecoinRates { rates })
    }
}

#[derive(Debug, Deserialize)]
pub struct CardPremiumsResponse {
    #[serde(default)]
    amount: Option<Decimal>,
    #[serde(default)]
    providers: Option<Vec<ProviderCardWire>>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderCardWire {
    name: String,
    bank_transfer: MethodCostWire,
    debit_card: MethodCostWire,
    credit_card: MethodCostWire,
}

#[derive(Debug, Deserialize)]
struct MethodCostWire {
    total_cost: Decimal,
}

impl CardPremiumsResponse {
    pub fn into_domain(self) -> Result<CardCostReport, SourceError> {
        let providers = match self.providers {
            Some(p) if !p.is_empty() => p,
            _ => {
                return Err(SourceError::NoData(
                    self.error.unwrap_or_else(|| "no card premium providers".into()),
                ))
            }
        };

        Ok(CardCostReport {
            amount: self.amount,
            providers: providers
                .into_iter()
                .map(|p| ProviderCardCosts {
                    provider: p.name,
                    bank_transfer_cost: p.bank_transfer.total_cost,
                    debit_cost: p.debit_card.total_cost,
                    credit_cost: p.credit_card.total_cost,
                })
                .collect(),
        })
    }
}
