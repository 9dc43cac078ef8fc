//! Select-list rewriting for spatial projections.
//!
//! The base statement generator emits spatial columns as bare identifiers,
//! which PostgreSQL returns in its binary encoding. The rewriter wraps each
//! spatial column of the select list in an EWKT-producing call aliased back
//! to the column name:
//!
//! ```text
//! SELECT [id],[geo] FROM (...) t
//! SELECT [id],ST_AsEWKT([geo]) as [geo] FROM (...) t
//! ```
//!
//! Everything else in the statement is copied byte for byte.

use geosql_config::TranslatorConfig;
use geosql_core::{GeoSqlError, QuoteStyle, Result};

use crate::projection::ColumnProjection;

/// Position of a located column inside the select list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnMatch {
    start: usize,
    /// Length of the terminator that followed the identifier (comma, line
    /// break, or nothing for a final column followed by the boundary).
    terminator_len: usize,
}

/// Rewrites the projection list of a generated `SELECT`.
#[derive(Debug, Clone)]
pub struct SelectRewriter {
    from_marker: String,
    line_break: String,
    ewkt_function: String,
    quote_style: QuoteStyle,
}

impl Default for SelectRewriter {
    fn default() -> Self {
        Self::from_config(&TranslatorConfig::default())
    }
}

impl SelectRewriter {
    pub fn from_config(config: &TranslatorConfig) -> Self {
        Self {
            from_marker: config.select.from_marker.clone(),
            line_break: config.select.line_break.clone(),
            ewkt_function: config.select.ewkt_function.clone(),
            quote_style: config.identifiers.quote_style,
        }
    }

    /// Wrap every spatial projection of `sql` in the EWKT function.
    ///
    /// Projections are consumed left to right; the scan cursor only moves
    /// forward, so the metadata order must match the select-list order.
    /// Fails with [`GeoSqlError::ProjectionMismatch`] if a spatial column
    /// cannot be found, and with [`GeoSqlError::InvalidArgument`] if the
    /// statement has no `FROM (` boundary. Nothing is returned on failure.
    pub fn rewrite(&self, sql: &str, projections: &[ColumnProjection]) -> Result<String> {
        let from_pos = sql.find(&self.from_marker).ok_or_else(|| {
            GeoSqlError::invalid_argument(format!(
                "SELECT statement has no '{}' boundary",
                self.from_marker
            ))
        })?;
        let select_list = &sql[..from_pos];

        let mut out = String::with_capacity(sql.len() + projections.len() * 32);
        let mut cursor = 0;
        let mut patched = 0usize;

        for projection in projections.iter().filter(|p| p.is_spatial()) {
            let identifier = self.quote_style.quote(&projection.name)?;
            let found = self.locate(select_list, cursor, &identifier).ok_or_else(|| {
                tracing::warn!(
                    identifier = %identifier,
                    cursor,
                    "Spatial projection not found in SELECT clause"
                );
                GeoSqlError::projection_mismatch(&identifier)
            })?;

            let after_identifier = found.start + identifier.len();
            let end = after_identifier + found.terminator_len;

            out.push_str(&select_list[cursor..found.start]);
            out.push_str(&self.ewkt_function);
            out.push('(');
            out.push_str(&identifier);
            out.push_str(") as ");
            out.push_str(&identifier);
            out.push_str(&select_list[after_identifier..end]);

            tracing::trace!(
                identifier = %identifier,
                start = found.start,
                "Wrapped spatial column"
            );
            cursor = end;
            patched += 1;
        }

        out.push_str(&select_list[cursor..]);
        out.push_str(&sql[from_pos..]);

        tracing::debug!(
            projections = projections.len(),
            spatial = patched,
            "Rewrote SELECT clause"
        );
        Ok(out)
    }

    /// Find `identifier` at or after `cursor`: first followed by a comma, then
    /// followed by the line break, then as the last token before the boundary.
    fn locate(
        &self,
        select_list: &str,
        cursor: usize,
        identifier: &str,
    ) -> Option<ColumnMatch> {
        let rest = &select_list[cursor..];

        for terminator in [",", self.line_break.as_str()] {
            let needle = format!("{identifier}{terminator}");
            if let Some(offset) = rest.find(&needle) {
                return Some(ColumnMatch {
                    start: cursor + offset,
                    terminator_len: terminator.len(),
                });
            }
        }

        let trimmed = rest.trim_end();
        if trimmed.ends_with(identifier) {
            return Some(ColumnMatch {
                start: cursor + trimmed.len() - identifier.len(),
                terminator_len: 0,
            });
        }

        None
    }
}
