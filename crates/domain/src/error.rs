//! Validation errors raised when values enter the domain.

use rust_decimal::Decimal;

/// Errors produced by domain validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Risk target outside the recognised selectors.
    #[error("Invalid risk target {0}: expected one of 15, 25, 35")]
    InvalidRiskTarget(u32),
    /// Manual LTV outside `[0, 1)`.
    #[error("Manual LTV {0} must lie in [0, 1)")]
    ManualLtvOutOfRange(Decimal),
    /// Looping to this LTV pushes a position value past the decimal range.
    #[error("Leverage at LTV {0} exceeds the representable range")]
    LeverageOverflow(Decimal),
    /// Initial capital is zero or negative.
    #[error("Initial capital must be positive, got {0}")]
    NonPositiveCapital(Decimal),
    /// Advanced overrides supplied on a simple-mode strategy.
    #[error("Advanced overrides are only available in pro mode")]
    OverridesRequireProMode,
    /// Market snapshot breaks its parameter invariants.
    #[error("Invalid market snapshot for {market_id}: {reason}")]
    InvalidSnapshot { market_id: String, reason: String },
    /// Points model failed validation.
    #[error("Invalid points model: {0}")]
    InvalidPointsModel(String),
    /// Textual value does not name a known variant.
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}
