use crate::domain::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// USD amount to send. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct TransferAmount(Decimal);

impl TransferAmount {
    /// Amount used in requests when the selection leaves it unset.
    pub const DEFAULT: TransferAmount = TransferAmount(Decimal::ONE_THOUSAND);

    pub fn new(value: Decimal) -> Result<Self, DomainError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::InvalidInput(format!(
                "Transfer amount must not be negative, got {value}"
            )));
        }
        Ok(TransferAmount(value.normalize()))
    }

    /// Lenient parse of free-text input: anything but digits and `.` is
    /// dropped, and an empty or unparsable remainder means "unset".
    pub fn parse_input(raw: &str) -> Option<Self> {
        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        if cleaned.is_empty() {
            return None;
        }
        Decimal::from_str(&cleaned).ok().and_then(|d| Self::new(d).ok())
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for TransferAmount {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TransferAmount> for Decimal {
    fn from(a: TransferAmount) -> Self {
        a.0
    }
}

impl FromStr for TransferAmount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = Decimal::from_str(s.trim())
            .map_err(|e| DomainError::InvalidInput(format!("Invalid amount '{s}': {e}")))?;
        Self::new(d)
    }
}

impl fmt::Display for TransferAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
