//! Generic (non-spatial) SQL literal conversion.

/// Non-spatial values that can be spliced into SQL text.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Json(String),
    Timestamp(String),
    Null,
}

impl SqlValue {
    /// Render the value as a PostgreSQL literal.
    pub fn to_sql_literal(&self) -> String {
        match self {
            Self::Text(s) => quote_literal(s),
            Self::Integer(i) => i.to_string(),
            Self::Float(f) if f.is_nan() => "'NaN'::float8".to_string(),
            Self::Float(f) if f.is_infinite() => {
                if f.is_sign_positive() {
                    "'Infinity'::float8".to_string()
                } else {
                    "'-Infinity'::float8".to_string()
                }
            }
            Self::Float(f) => f.to_string(),
            Self::Boolean(true) => "TRUE".to_string(),
            Self::Boolean(false) => "FALSE".to_string(),
            Self::Json(s) => format!("{}::jsonb", quote_literal(s)),
            Self::Timestamp(s) => format!("{}::timestamptz", quote_literal(s)),
            Self::Null => "NULL".to_string(),
        }
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Single-quote a string, doubling embedded quotes.
pub fn quote_literal(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_literal_escaping() {
        assert_eq!(SqlValue::from("O'Brien").to_sql_literal(), "'O''Brien'");
        assert_eq!(SqlValue::Text(String::new()).to_sql_literal(), "''");
    }

    #[test]
    fn test_scalar_literals() {
        assert_eq!(SqlValue::from(42_i64).to_sql_literal(), "42");
        assert_eq!(SqlValue::from(1.5_f64).to_sql_literal(), "1.5");
        assert_eq!(SqlValue::from(true).to_sql_literal(), "TRUE");
        assert_eq!(SqlValue::Boolean(false).to_sql_literal(), "FALSE");
        assert_eq!(SqlValue::Null.to_sql_literal(), "NULL");
    }

    #[test]
    fn test_special_floats() {
        assert_eq!(SqlValue::Float(f64::NAN).to_sql_literal(), "'NaN'::float8");
        assert_eq!(
            SqlValue::Float(f64::NEG_INFINITY).to_sql_literal(),
            "'-Infinity'::float8"
        );
    }

    #[test]
    fn test_typed_literals() {
        assert_eq!(
            SqlValue::Json(r#"{"a":1}"#.into()).to_sql_literal(),
            r#"'{"a":1}'::jsonb"#
        );
        assert_eq!(
            SqlValue::Timestamp("2024-01-01T00:00:00Z".into()).to_sql_literal(),
            "'2024-01-01T00:00:00Z'::timestamptz"
        );
    }
}
