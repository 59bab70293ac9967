//! Strategy ranking for the LoopLab simulator.
//!
//! Objective functions score a simulated strategy; [`compare`] applies them
//! across a set of strategies and awards badges to the best.

pub mod compare;
pub mod objective;

pub use compare::{Badge, CompareError, ComparisonRow, compare_strategies, simulate_and_compare};
pub use objective::{
    MaximizeNetRoe, MaximizeRiskAdjusted, MaximizeSafety, ObjectiveFunction, risk_adjusted_return,
};
