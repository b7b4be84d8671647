use crate::domain::values::source_result::HasRecords;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated cost figures for one provider in a corridor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderCostStat {
    pub provider: String,
    pub avg_rate: Decimal,
    pub avg_fee: Decimal,
    pub total_cost: Decimal,
    pub sample_size: u64,
}

impl ProviderCostStat {
    pub fn new(
        provider: impl Into<String>,
        avg_rate: Decimal,
        avg_fee: Decimal,
        total_cost: Decimal,
        sample_size: u64,
    ) -> Self {
        Self {
            provider: provider.into(),
            avg_rate,
            avg_fee,
            total_cost,
            sample_size,
        }
    }
}

/// Normalized competitive-analysis payload. Provider names are unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostAnalysis {
    pub providers: Vec<ProviderCostStat>,
    /// Number of raw quotes behind the statistics.
    pub data_points: u64,
}

impl HasRecords for CostAnalysis {
    fn has_records(&self) -> bool {
        !self.providers.is_empty()
    }
}
