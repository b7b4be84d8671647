pub mod remittance_api;
