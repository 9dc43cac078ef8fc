//! Configuration errors.

/// Errors raised while building or validating a translator configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config build error: {0}")]
    Build(#[from] ::config::ConfigError),

    #[error("config deserialize error: {0}")]
    Deserialize(String),

    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    /// Creates a new validation error.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

impl From<ConfigError> for geosql_core::GeoSqlError {
    fn from(err: ConfigError) -> Self {
        geosql_core::GeoSqlError::configuration(err.to_string())
    }
}
