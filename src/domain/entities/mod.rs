pub mod bundle;
pub mod card_costs;
pub mod cost_analysis;
pub mod health;
pub mod insight;
pub mod p2p;
pub mod selection;
pub mod stablecoin;
