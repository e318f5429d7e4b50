/// Kuba domain types and rules.
pub mod kuba;
