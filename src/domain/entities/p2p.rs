use crate::domain::values::source_result::HasRecords;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Best peer-to-peer USDT sell offer for the corridor currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct P2pQuote {
    /// Local currency units per USD.
    pub exchange_rate: Decimal,
    pub recipient_receives: Option<Decimal>,
    pub fee: Decimal,
    pub payment_methods: Vec<String>,
}

impl HasRecords for P2pQuote {
    fn has_records(&self) -> bool {
        self.exchange_rate > Decimal::ZERO
    }
}
