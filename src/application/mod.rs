pub mod aggregator;
pub mod controller;
pub mod sources;
pub mod view_model;
