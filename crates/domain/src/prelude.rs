//! Prelude module for convenient imports.
//!
//! ```rust
//! use looplab_domain::prelude::*;
//! ```

pub use crate::entities::{
    AdvancedOverrides, FdvScenarios, Market, MarketSnapshot, PointsModel, PointsModelId,
    PointsProOptions, PointsRange, StrategyId, StrategyInput,
};
pub use crate::enums::{Confidence, FdvScenario, Network, ProviderName, RiskTarget, StrategyMode};
pub use crate::error::DomainError;
// The strategy-level break-even solver lives in the simulation prelude.
pub use crate::math::leverage::{
    BASE_FEE_RATE, fee_rate, leverage_multiplier, liquidation_price, net_roe,
};
pub use crate::value_objects::{
    Assumption, AssumptionValue, Assumptions, HealthFactor, Percentage, SavedSnapshot,
    StrategyResult, StressResult,
};
