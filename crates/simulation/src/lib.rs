//! Quantitative engine of the LoopLab simulator.
//!
//! - [`leverage_policy`]: risk target → recommended LTV
//! - [`engine`]: steady-state yield and liquidation metrics of a loop
//! - [`stress`]: fixed price and borrow-rate shock scenarios
//! - [`break_even`]: borrow APY at which net ROE is zero
//! - [`risk`]: alerts derived from a result
//! - [`points`]: airdrop valuation of a points campaign
//!
//! All operations are pure functions of their arguments.

pub mod break_even;
pub mod engine;
pub mod leverage_policy;
pub mod points;
pub mod prelude;
pub mod risk;
pub mod stress;
