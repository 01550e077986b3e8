//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur during market data operations.
///
/// Per-symbol failures during a refresh are recovered by the caller; they
/// are recorded and logged, never silently dropped.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider.
    /// This is a terminal error - retrying won't help.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned data that failed validation checks.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// The symbol exists but has no quotes in the requested period.
    #[error("No data for requested period")]
    NoDataForRange,

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Whether the failure is specific to one symbol rather than the
    /// provider as a whole. Symbol-scoped failures should not discourage
    /// fetching the remaining symbols in a batch.
    pub fn is_symbol_scoped(&self) -> bool {
        matches!(
            self,
            Self::SymbolNotFound(_) | Self::NoDataForRange | Self::ValidationFailed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MarketDataError::SymbolNotFound("INVALID".to_string());
        assert_eq!(format!("{}", error), "Symbol not found: INVALID");

        let error = MarketDataError::Timeout {
            provider: "YAHOO".to_string(),
        };
        assert_eq!(format!("{}", error), "Timeout: YAHOO");

        let error = MarketDataError::ProviderError {
            provider: "YAHOO".to_string(),
            message: "Internal server error".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Provider error: YAHOO - Internal server error"
        );
    }

    #[test]
    fn test_symbol_scoped_classification() {
        assert!(MarketDataError::SymbolNotFound("X".to_string()).is_symbol_scoped());
        assert!(MarketDataError::NoDataForRange.is_symbol_scoped());
        assert!(!MarketDataError::Timeout {
            provider: "YAHOO".to_string()
        }
        .is_symbol_scoped());
    }
}
