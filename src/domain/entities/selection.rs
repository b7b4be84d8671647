use crate::domain::values::amount::TransferAmount;
use crate::domain::values::corridor::Corridor;
use serde::{Deserialize, Serialize};

/// What the user is looking at: a corridor and an optional amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub corridor: Corridor,
    pub amount: Option<TransferAmount>,
}

impl Selection {
    pub fn new(corridor: Corridor, amount: Option<TransferAmount>) -> Self {
        Self { corridor, amount }
    }

    /// Amount to put on the wire. An unset amount falls back to the default
    /// without touching the selection itself.
    pub fn request_amount(&self) -> TransferAmount {
        self.amount.unwrap_or(TransferAmount::DEFAULT)
    }

    pub fn with_corridor(self, corridor: Corridor) -> Self {
        Self { corridor, ..self }
    }

    pub fn with_amount(self, amount: Option<TransferAmount>) -> Self {
        Self { amount, ..self }
    }
}
