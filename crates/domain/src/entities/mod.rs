pub mod market;
pub mod points;
pub mod strategy;

// Re-export for easier access
pub use market::{Market, MarketSnapshot};
pub use points::{FdvScenarios, PointsModel, PointsModelId, PointsProOptions, PointsRange};
pub use strategy::{AdvancedOverrides, StrategyId, StrategyInput};
