//! Conversion of query values into SQL literal text.
//!
//! Spatial values are always emitted as single-quoted EWKT. PostGIS overloads
//! `ST_Distance`/`ST_Intersects` separately for `geography` and `geometry`, so
//! a literal whose kind differs from the storage assumed for the surrounding
//! expression gets an explicit cast to that storage type.

use geosql_core::{SpatialKind, SpatialValue, SqlValue, quote_literal};

/// Which cast a spatial literal receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastPolicy {
    /// The surrounding expression operates on this storage type; a literal of
    /// the other kind is cast to it.
    Storage(SpatialKind),
    /// No storage assumption (INSERT/UPDATE values): the literal is cast to
    /// its own kind.
    SelfDescribing,
}

impl CastPolicy {
    /// Cast suffix for a value of `kind` under this policy.
    pub fn cast_for(self, kind: SpatialKind) -> Option<&'static str> {
        match self {
            Self::Storage(storage) if storage == kind => None,
            Self::Storage(storage) => Some(storage.cast_suffix()),
            Self::SelfDescribing => Some(kind.cast_suffix()),
        }
    }
}

/// A value destined for a SQL text position.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Spatial(SpatialValue),
    Value(SqlValue),
}

impl From<SpatialValue> for QueryValue {
    fn from(value: SpatialValue) -> Self {
        Self::Spatial(value)
    }
}

impl From<SqlValue> for QueryValue {
    fn from(value: SqlValue) -> Self {
        Self::Value(value)
    }
}

/// Render a spatial value as `'<EWKT>'` plus the cast chosen by `policy`.
pub fn spatial_literal(value: &SpatialValue, policy: CastPolicy) -> String {
    let quoted = quote_literal(&value.ewkt());
    match policy.cast_for(value.kind()) {
        Some(cast) => format!("{quoted}{cast}"),
        None => quoted,
    }
}

/// Render any query value; non-spatial values use the generic conversion.
pub fn literal(value: &QueryValue, policy: CastPolicy) -> String {
    match value {
        QueryValue::Spatial(v) => spatial_literal(v, policy),
        QueryValue::Value(v) => v.to_sql_literal(),
    }
}
