// ============================================================================
// Money Errors
// Error types for construction, arithmetic and registry operations
// ============================================================================

use thiserror::Error;

/// Errors that can occur while building or combining money values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Currency code is not known to the registry
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),

    /// Exact result does not fit the target scale and no rounding mode was given
    #[error("rounding necessary: result does not fit the target scale exactly")]
    RoundingNecessary,

    /// Operands of a binary operation carry different currencies
    #[error("currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch { expected: String, found: String },

    /// Attempted division by zero
    #[error("division by zero")]
    DivisionByZero,

    /// Result exceeded the precision of the decimal engine
    #[error("arithmetic overflow: result exceeds decimal precision")]
    Overflow,

    /// Input string or value could not be turned into an amount
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Requested scale is above the supported maximum
    #[error("invalid scale {0}: must be at most 28")]
    InvalidScale(u32),

    /// Allocation ratios or part count are unusable
    #[error("invalid allocation: {0}")]
    InvalidAllocation(String),

    /// Registry configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Interchange record could not be encoded or decoded
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

impl MoneyError {
    pub(crate) fn mismatch(expected: &str, found: &str) -> Self {
        tracing::trace!(expected, found, "currency mismatch");
        MoneyError::CurrencyMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoneyError::UnknownCurrency("XYZ".to_string()).to_string(),
            "unknown currency: XYZ"
        );
        assert_eq!(MoneyError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            MoneyError::mismatch("USD", "EUR").to_string(),
            "currency mismatch: expected USD, found EUR"
        );
        assert_eq!(
            MoneyError::InvalidScale(30).to_string(),
            "invalid scale 30: must be at most 28"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(MoneyError::RoundingNecessary, MoneyError::RoundingNecessary);
        assert_ne!(MoneyError::Overflow, MoneyError::DivisionByZero);
    }
}
