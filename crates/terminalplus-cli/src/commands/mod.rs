pub mod boosts;
pub mod config;
pub mod context;
pub mod profile;
pub mod tiers;
