//! Core financial records and the pure calculators over them

pub mod calendar;
pub mod config;
pub mod health;
pub mod log;
pub mod net_worth;
pub mod records;
pub mod recommendations;
pub mod safe_to_spend;
pub mod snapshot;
pub mod tone;
pub mod validation;

// Re-export main types for cleaner imports
pub use health::{CategoryScore, HealthParams, HealthScore};
pub use safe_to_spend::{SafeToSpendMode, SafeToSpendParams};
pub use snapshot::FinancialSnapshot;
pub use tone::Tone;
