//! Data contracts of the LoopLab lending-loop simulator.
//!
//! This crate holds the value objects exchanged between the market catalog,
//! the simulation engine and the persistence layer, together with the
//! closed-form loop arithmetic they share.

/// Market, strategy and points-model entities.
pub mod entities;
/// Discrete selectors and labels.
pub mod enums;
/// Validation errors.
pub mod error;
/// Loop arithmetic.
pub mod math;
/// Prelude module for convenient imports.
pub mod prelude;
/// Results and other derived values.
pub mod value_objects;

pub use error::DomainError;
