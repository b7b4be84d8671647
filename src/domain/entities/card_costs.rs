use crate::domain::values::source_result::HasRecords;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Total cost of the same transfer funded three ways, for one provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderCardCosts {
    pub provider: String,
    pub bank_transfer_cost: Decimal,
    pub debit_cost: Decimal,
    pub credit_cost: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardCostReport {
    /// Amount the upstream priced, when it echoed one back.
    pub amount: Option<Decimal>,
    pub providers: Vec<ProviderCardCosts>,
}

impl HasRecords for CardCostReport {
    fn has_records(&self) -> bool {
        !self.providers.is_empty()
    }
}
