//! # geosql-postgis
//!
//! Spatial SQL translation for PostGIS-backed storage.
//!
//! - [`select_rewriter`]: wraps spatial columns of a generated `SELECT` in
//!   `ST_AsEWKT(..)`, leaving the rest of the statement untouched
//! - [`literal`]: EWKT literals with overload-disambiguating casts
//! - [`predicate`]: `GeoDistance`/`GeomDistance`/`GeoIntersects`/`GeomIntersects`
//!   to `ST_Distance`/`ST_Intersects`
//! - [`translator`]: the facade used by the data-access layer
//!
//! All operations are pure functions of their inputs and may be called
//! concurrently.

pub mod fallback;
pub mod literal;
pub mod observability;
pub mod predicate;
pub mod projection;
pub mod select_rewriter;
pub mod translator;

pub use fallback::{FallbackTranslator, StrictFallback};
pub use literal::{CastPolicy, QueryValue, literal, spatial_literal};
pub use predicate::{
    Operand, PredicateCompiler, PredicateFunctionCall, SpatialFunction, SpatialOperation,
};
pub use projection::{
    ColumnProjection, DeclaredType, PropStorage, StorageStruct, ViewProperty, resolve_projections,
};
pub use select_rewriter::SelectRewriter;
pub use translator::GisPostgresTranslator;
