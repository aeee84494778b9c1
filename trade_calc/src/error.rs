use thiserror::Error;

/// Rejected calculator input.
///
/// The calculators themselves never fail; callers validate with
/// [`SpotInput::validate`](crate::SpotInput::validate) and
/// [`FuturesInput::validate`](crate::FuturesInput::validate) before computing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("leverage must be between 1 and {max} (got {value})")]
    LeverageOutOfRange { value: u32, max: u32 },

    #[error("{field} must be between 0 and 1 (got {value})")]
    FractionOutOfRange { field: &'static str, value: f64 },

    #[error("unknown direction '{0}', expected 'long' or 'short'")]
    UnknownDirection(String),

    #[error("unknown commission policy '{0}', expected 'single' or 'round_trip'")]
    UnknownCommissionPolicy(String),
}
