//! PostGIS translation entry point for the data-access layer.
//!
//! The data-access layer builds the base statement and the predicate tree;
//! this type patches the spatial parts:
//!
//! ```ignore
//! let translator = GisPostgresTranslator::new(TranslatorConfig::default())?
//!     .with_fallback(|call: &PredicateFunctionCall| generic.function_to_sql(call));
//!
//! let sql = translator.generate_select(&base_sql, &view, &storage)?;
//! let predicate = translator.function_to_sql(&call)?;
//! ```

use std::fmt;

use geosql_config::{TranslatorConfig, load_config};
use geosql_core::Result;

use crate::fallback::{FallbackTranslator, StrictFallback};
use crate::literal::{CastPolicy, QueryValue, literal};
use crate::predicate::{PredicateCompiler, PredicateFunctionCall};
use crate::projection::{ColumnProjection, StorageStruct, ViewProperty, resolve_projections};
use crate::select_rewriter::SelectRewriter;

pub struct GisPostgresTranslator {
    config: TranslatorConfig,
    rewriter: SelectRewriter,
    compiler: PredicateCompiler,
    fallback: Box<dyn FallbackTranslator>,
}

impl fmt::Debug for GisPostgresTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GisPostgresTranslator")
            .field("config", &self.config)
            .field("rewriter", &self.rewriter)
            .field("compiler", &self.compiler)
            .finish_non_exhaustive()
    }
}

impl GisPostgresTranslator {
    /// Create a translator from a validated configuration. Calls the
    /// compiler declines fail with `UnsupportedFunction` until a fallback
    /// is installed.
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rewriter: SelectRewriter::from_config(&config),
            compiler: PredicateCompiler::new(config.identifiers.quote_style),
            fallback: Box::new(StrictFallback),
            config,
        })
    }

    /// Load configuration (file + `GEOSQL__*` env) and build a translator.
    ///
    /// Does not touch the global subscriber; pass `config().logging` to
    /// [`crate::observability::init_tracing`] when the host has none.
    pub fn from_config_file(path: Option<&str>) -> Result<Self> {
        let config = load_config(path)?;
        Self::new(config)
    }

    /// Install the generic predicate translator.
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl FallbackTranslator + 'static) -> Self {
        self.fallback = Box::new(fallback);
        self
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Rewrite spatial projections of a generated `SELECT`.
    pub fn rewrite_select(&self, sql: &str, projections: &[ColumnProjection]) -> Result<String> {
        self.rewriter.rewrite(sql, projections)
    }

    /// Resolve projection types from view and storage metadata, then rewrite.
    pub fn generate_select(
        &self,
        sql: &str,
        view: &[ViewProperty],
        storage: &[StorageStruct],
    ) -> Result<String> {
        let projections = resolve_projections(view, storage);
        self.rewriter.rewrite(sql, &projections)
    }

    /// Convert a value to SQL text for INSERT/UPDATE statements.
    pub fn value_to_sql(&self, value: &QueryValue) -> String {
        literal(value, CastPolicy::SelfDescribing)
    }

    /// Compile a spatial predicate; `None` when the call is not spatial.
    pub fn compile_function(&self, call: &PredicateFunctionCall) -> Result<Option<String>> {
        self.compiler.compile(call)
    }

    /// Translate a predicate function, delegating non-spatial calls to the
    /// fallback translator.
    pub fn function_to_sql(&self, call: &PredicateFunctionCall) -> Result<String> {
        if let Some(sql) = self.compiler.compile(call)? {
            return Ok(sql);
        }

        tracing::debug!(
            function = %call.function_name,
            "Delegating predicate to fallback translator"
        );
        self.fallback.function_to_sql(call).inspect_err(|e| {
            tracing::warn!(
                function = %call.function_name,
                category = e.category().as_str(),
                error = %e,
                "Fallback translation failed"
            );
        })
    }
}
