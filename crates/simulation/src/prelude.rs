//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use looplab_simulation::prelude::*;
//! ```

// Engine
pub use crate::engine::{LoopParameters, labels, simulate_strategy};

// Leverage policy
pub use crate::leverage_policy::{ltv_used, recommended_ltv};

// Stress
pub use crate::stress::{STRESS_SCENARIOS, Shock, StressScenario, stress_from_base, stress_tests};

// Break-even
pub use crate::break_even::break_even_borrow_rate;

// Risk alerts
pub use crate::risk::{RiskAlert, RiskCheck, risk_alerts};

// Points
pub use crate::points::{PointsProjection, ScenarioValuation, UnlockSchedule, project_airdrop};
