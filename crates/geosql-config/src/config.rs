//! Configuration types for the PostGIS translation layer.

use geosql_core::QuoteStyle;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default)]
    pub select: SelectConfig,
    #[serde(default)]
    pub identifiers: IdentifierConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TranslatorConfig {
    /// Parse a configuration from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(text).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Sets the marker separating the select list from the table source.
    #[must_use]
    pub fn with_from_marker(mut self, marker: impl Into<String>) -> Self {
        self.select.from_marker = marker.into();
        self
    }

    /// Sets the line break that terminates the final projected column.
    #[must_use]
    pub fn with_line_break(mut self, line_break: impl Into<String>) -> Self {
        self.select.line_break = line_break.into();
        self
    }

    /// Sets the SQL function wrapping spatial projections.
    #[must_use]
    pub fn with_ewkt_function(mut self, function: impl Into<String>) -> Self {
        self.select.ewkt_function = function.into();
        self
    }

    /// Sets the identifier quoting style.
    #[must_use]
    pub fn with_quote_style(mut self, style: QuoteStyle) -> Self {
        self.identifiers.quote_style = style;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.select.from_marker.trim().is_empty() {
            return Err(ConfigError::invalid("select.from_marker must not be empty"));
        }
        if self.select.line_break.is_empty() {
            return Err(ConfigError::invalid("select.line_break must not be empty"));
        }
        if !self
            .select
            .line_break
            .chars()
            .all(|c| c == '\r' || c == '\n')
        {
            return Err(ConfigError::invalid(
                "select.line_break may only contain \\r and \\n",
            ));
        }
        if !is_plain_identifier(&self.select.ewkt_function) {
            return Err(ConfigError::invalid(format!(
                "select.ewkt_function must be a plain SQL function name, got '{}'",
                self.select.ewkt_function
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::invalid("logging.level must not be empty"));
        }
        Ok(())
    }
}

/// Select-list rewriting settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectConfig {
    #[serde(default = "default_from_marker")]
    pub from_marker: String,
    #[serde(default = "default_line_break")]
    pub line_break: String,
    #[serde(default = "default_ewkt_function")]
    pub ewkt_function: String,
}

fn default_from_marker() -> String {
    "FROM (".into()
}
fn default_line_break() -> String {
    "\n".into()
}
fn default_ewkt_function() -> String {
    "ST_AsEWKT".into()
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            from_marker: default_from_marker(),
            line_break: default_line_break(),
            ewkt_function: default_ewkt_function(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentifierConfig {
    #[serde(default)]
    pub quote_style: QuoteStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
