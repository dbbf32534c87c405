//! Ledger errors.

use thiserror::Error;

/// Errors returned when a trade cannot be appended to the ledger.
///
/// A rejected append never mutates the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A field of the add-trade request failed validation.
    #[error("Invalid value for '{field}': {message}")]
    InvalidInput {
        /// Field name.
        field: &'static str,
        /// Error message.
        message: String,
    },

    /// The symbol is not present in the tick value table.
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),
}

impl LedgerError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
        }
    }

    /// Returns true if this is an `InvalidInput` error.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::invalid("ticks", "ticks must be nonzero");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'ticks': ticks must be nonzero"
        );
        assert!(err.is_invalid_input());

        let err = LedgerError::UnknownSymbol("CL".to_string());
        assert_eq!(err.to_string(), "Unknown symbol: CL");
        assert!(!err.is_invalid_input());
    }
}
