pub mod amount;
pub mod card_premium;
pub mod corridor;
pub mod metrics;
pub mod source_result;
