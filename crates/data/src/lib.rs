//! Market data and persistence for LoopLab.
//!
//! [`providers`] resolves market ids to snapshots; [`repositories`] stores
//! the user's saved strategies and points models.

pub mod error;
pub mod providers;
pub mod repositories;

pub use error::DataError;
