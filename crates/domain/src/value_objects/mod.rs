pub mod health_factor;
pub mod percentage;
pub mod saved_snapshot;
pub mod strategy_result;
pub mod stress_result;

pub use health_factor::HealthFactor;
pub use percentage::Percentage;
pub use saved_snapshot::SavedSnapshot;
pub use strategy_result::{Assumption, AssumptionValue, Assumptions, StrategyResult};
pub use stress_result::StressResult;
