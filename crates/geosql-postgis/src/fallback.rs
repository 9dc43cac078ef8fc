//! Seam for the generic (non-spatial) predicate translator.

use geosql_core::{GeoSqlError, Result};

use crate::predicate::PredicateFunctionCall;

/// Translates predicate functions the spatial compiler does not own.
pub trait FallbackTranslator: Send + Sync {
    fn function_to_sql(&self, call: &PredicateFunctionCall) -> Result<String>;
}

impl<F> FallbackTranslator for F
where
    F: Fn(&PredicateFunctionCall) -> Result<String> + Send + Sync,
{
    fn function_to_sql(&self, call: &PredicateFunctionCall) -> Result<String> {
        self(call)
    }
}

/// Fallback used when no generic translator is installed: every call is an
/// [`GeoSqlError::UnsupportedFunction`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictFallback;

impl FallbackTranslator for StrictFallback {
    fn function_to_sql(&self, call: &PredicateFunctionCall) -> Result<String> {
        Err(GeoSqlError::unsupported_function(&call.function_name))
    }
}
