use thiserror::Error;

/// Error types for spatial SQL translation
#[derive(Debug, Error)]
pub enum GeoSqlError {
    /// A spatial projection could not be located in the generated select list.
    #[error(
        "Unexpected property name {identifier}. Mismatch between view metadata and SELECT clause."
    )]
    ProjectionMismatch { identifier: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid EWKT: {0}")]
    InvalidEwkt(String),

    #[error("Unsupported function: {0}")]
    UnsupportedFunction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl GeoSqlError {
    /// Create a new ProjectionMismatch error
    pub fn projection_mismatch(identifier: impl Into<String>) -> Self {
        Self::ProjectionMismatch {
            identifier: identifier.into(),
        }
    }

    /// Create a new InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a new InvalidEwkt error
    pub fn invalid_ewkt(message: impl Into<String>) -> Self {
        Self::InvalidEwkt(message.into())
    }

    /// Create a new UnsupportedFunction error
    pub fn unsupported_function(name: impl Into<String>) -> Self {
        Self::UnsupportedFunction(name.into())
    }

    /// Create a new Configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// True when the caller handed over inputs that break the translation contract.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::ProjectionMismatch { .. } | Self::InvalidArgument(_)
        )
    }

    /// Get error category for logging
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectionMismatch { .. } | Self::InvalidArgument(_) => ErrorCategory::Contract,
            Self::InvalidEwkt(_) => ErrorCategory::Validation,
            Self::UnsupportedFunction(_) => ErrorCategory::Unsupported,
            Self::Configuration(_) => ErrorCategory::Configuration,
        }
    }
}

/// Error categories for log classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Contract,
    Validation,
    Unsupported,
    Configuration,
}

impl ErrorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::Validation => "validation",
            Self::Unsupported => "unsupported",
            Self::Configuration => "configuration",
        }
    }
}

/// Result type alias for translation operations
pub type Result<T> = std::result::Result<T, GeoSqlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_mismatch_names_identifier() {
        let err = GeoSqlError::projection_mismatch("[geo]");
        let message = err.to_string();
        assert!(message.contains("[geo]"));
        assert!(message.contains("Mismatch"));
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(
            GeoSqlError::projection_mismatch("[a]").category(),
            ErrorCategory::Contract
        );
        assert_eq!(
            GeoSqlError::invalid_argument("missing FROM").category(),
            ErrorCategory::Contract
        );
        assert_eq!(
            GeoSqlError::invalid_ewkt("empty").category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            GeoSqlError::unsupported_function("Foo").category(),
            ErrorCategory::Unsupported
        );
        assert_eq!(ErrorCategory::Configuration.as_str(), "configuration");
    }

    #[test]
    fn test_contract_violation() {
        assert!(GeoSqlError::invalid_argument("x").is_contract_violation());
        assert!(!GeoSqlError::configuration("x").is_contract_violation());
    }
}
