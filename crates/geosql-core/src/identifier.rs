//! Identifier quoting shared by the statement generator and the spatial layer.
//!
//! The select rewriter locates columns by their quoted text, so the same
//! routine must be used on both sides or matching fails.

use serde::{Deserialize, Serialize};

use crate::error::{GeoSqlError, Result};

/// How SQL identifiers are delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStyle {
    /// `[name]`, closing brackets doubled.
    #[default]
    Bracket,
    /// `"name"`, double quotes doubled.
    DoubleQuote,
}

impl QuoteStyle {
    /// Quote an identifier.
    pub fn quote(self, name: &str) -> Result<String> {
        if name.is_empty() {
            return Err(GeoSqlError::invalid_argument("Empty identifier"));
        }

        Ok(match self {
            Self::Bracket => format!("[{}]", name.replace(']', "]]")),
            Self::DoubleQuote => format!("\"{}\"", name.replace('"', "\"\"")),
        })
    }
}
