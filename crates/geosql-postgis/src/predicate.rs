//! Spatial predicate compilation.
//!
//! Translates the four spatial functions of the predicate language into
//! two-argument PostGIS calls:
//!
//! | function         | SQL             | storage assumed |
//! |------------------|-----------------|-----------------|
//! | `GeoDistance`    | `ST_Distance`   | geography       |
//! | `GeomDistance`   | `ST_Distance`   | geometry        |
//! | `GeoIntersects`  | `ST_Intersects` | geography       |
//! | `GeomIntersects` | `ST_Intersects` | geometry        |
//!
//! Geography columns may be declared with an underlying geometry type, so
//! column references in the geography family are always cast with
//! `::geography`. Literals are rendered through [`crate::literal`] under the
//! family's storage assumption.

use std::fmt;

use geosql_core::{GeoSqlError, QuoteStyle, Result, SpatialKind, SpatialValue, SqlValue};

use crate::literal::{CastPolicy, QueryValue, spatial_literal};

/// One parameter of a predicate function call.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Reference to a column by its unquoted name.
    Column(String),
    Literal(QueryValue),
}

impl Operand {
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(name.into())
    }

    pub fn spatial(value: SpatialValue) -> Self {
        Self::Literal(QueryValue::Spatial(value))
    }

    pub fn value(value: impl Into<SqlValue>) -> Self {
        Self::Literal(QueryValue::Value(value.into()))
    }
}

/// A function node of the predicate tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PredicateFunctionCall {
    pub function_name: String,
    pub parameters: Vec<Operand>,
}

impl PredicateFunctionCall {
    pub fn new(function_name: impl Into<String>, parameters: Vec<Operand>) -> Self {
        Self {
            function_name: function_name.into(),
            parameters,
        }
    }
}

/// Which PostGIS function a spatial predicate maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpatialOperation {
    Distance,
    Intersects,
}

impl SpatialOperation {
    pub fn sql_function(self) -> &'static str {
        match self {
            Self::Distance => "ST_Distance",
            Self::Intersects => "ST_Intersects",
        }
    }
}

/// A recognised spatial predicate function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpatialFunction {
    pub operation: SpatialOperation,
    pub kind: SpatialKind,
}

impl SpatialFunction {
    pub const GEO_DISTANCE: &'static str = "GeoDistance";
    pub const GEOM_DISTANCE: &'static str = "GeomDistance";
    pub const GEO_INTERSECTS: &'static str = "GeoIntersects";
    pub const GEOM_INTERSECTS: &'static str = "GeomIntersects";

    /// Look up a function by its predicate-language name.
    pub fn from_name(name: &str) -> Option<Self> {
        let (operation, kind) = match name {
            Self::GEO_DISTANCE => (SpatialOperation::Distance, SpatialKind::Geography),
            Self::GEOM_DISTANCE => (SpatialOperation::Distance, SpatialKind::Geometry),
            Self::GEO_INTERSECTS => (SpatialOperation::Intersects, SpatialKind::Geography),
            Self::GEOM_INTERSECTS => (SpatialOperation::Intersects, SpatialKind::Geometry),
            _ => return None,
        };
        Some(Self { operation, kind })
    }

    pub fn name(self) -> &'static str {
        match (self.operation, self.kind) {
            (SpatialOperation::Distance, SpatialKind::Geography) => Self::GEO_DISTANCE,
            (SpatialOperation::Distance, SpatialKind::Geometry) => Self::GEOM_DISTANCE,
            (SpatialOperation::Intersects, SpatialKind::Geography) => Self::GEO_INTERSECTS,
            (SpatialOperation::Intersects, SpatialKind::Geometry) => Self::GEOM_INTERSECTS,
        }
    }

    /// Cast applied to column references of this family.
    fn column_cast(self) -> &'static str {
        match self.kind {
            SpatialKind::Geography => SpatialKind::Geography.cast_suffix(),
            SpatialKind::Geometry => "",
        }
    }
}

impl fmt::Display for SpatialFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compiles spatial predicate function calls to PostGIS SQL.
#[derive(Debug, Clone, Copy, Default)]
pub struct PredicateCompiler {
    quote_style: QuoteStyle,
}

impl PredicateCompiler {
    pub fn new(quote_style: QuoteStyle) -> Self {
        Self { quote_style }
    }

    /// Compile `call`, or return `Ok(None)` when it is not a spatial
    /// predicate this compiler owns (unknown name, or a non-spatial literal
    /// operand). Operand order is preserved.
    pub fn compile(&self, call: &PredicateFunctionCall) -> Result<Option<String>> {
        let Some(function) = SpatialFunction::from_name(&call.function_name) else {
            return Ok(None);
        };

        let [left, right] = call.parameters.as_slice() else {
            return Err(GeoSqlError::invalid_argument(format!(
                "{function} expects 2 parameters, got {}",
                call.parameters.len()
            )));
        };

        let (Some(left), Some(right)) = (
            self.render_operand(function, left)?,
            self.render_operand(function, right)?,
        ) else {
            tracing::debug!(function = %function, "Non-spatial operand, leaving to fallback");
            return Ok(None);
        };

        let sql = format!("{}({left},{right})", function.operation.sql_function());
        tracing::debug!(function = %function, sql = %sql, "Compiled spatial predicate");
        Ok(Some(sql))
    }

    fn render_operand(
        &self,
        function: SpatialFunction,
        operand: &Operand,
    ) -> Result<Option<String>> {
        match operand {
            Operand::Column(name) => {
                let identifier = self.quote_style.quote(name)?;
                Ok(Some(format!("{identifier}{}", function.column_cast())))
            }
            Operand::Literal(QueryValue::Spatial(value)) => Ok(Some(spatial_literal(
                value,
                CastPolicy::Storage(function.kind),
            ))),
            Operand::Literal(QueryValue::Value(SqlValue::Null)) => Err(
                GeoSqlError::invalid_argument(format!("{function} does not accept NULL operands")),
            ),
            Operand::Literal(QueryValue::Value(_)) => Ok(None),
        }
    }
}
