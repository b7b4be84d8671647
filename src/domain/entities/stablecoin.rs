use crate::domain::values::source_result::HasRecords;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One coin/currency pair. `rate` is `None` when the upstream had no quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StablecoinRate {
    pub coin: String,
    pub currency: String,
    pub rate: Option<Decimal>,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StablecoinRates {
    pub rates: Vec<StablecoinRate>,
}

impl HasRecords for StablecoinRates {
    fn has_records(&self) -> bool {
        !self.rates.is_empty()
    }
}
