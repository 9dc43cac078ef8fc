//! Spatial value model.
//!
//! Geometry objects are opaque here: the only thing the translation layer
//! ever asks of a value is its EWKT text (`SRID=<n>;<WKT>`), plus the spatial
//! domain it belongs to. The domain is fixed when the value is constructed,
//! so no runtime type inspection is needed downstream.

use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{GeoSqlError, Result};

static EWKT_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?s)^\s*(?:(?i:SRID)=(-?[0-9]+);)?\s*([A-Za-z].*?)\s*$")
        .expect("Invalid EWKT regex")
});

/// The two PostGIS storage domains for spatial data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpatialKind {
    /// Geodesic semantics on the earth surface.
    Geography,
    /// Planar semantics.
    Geometry,
}

impl SpatialKind {
    /// SQL type name of the domain.
    pub fn as_sql_type(self) -> &'static str {
        match self {
            Self::Geography => "geography",
            Self::Geometry => "geometry",
        }
    }

    /// PostgreSQL cast suffix selecting this domain, e.g. `::geography`.
    pub fn cast_suffix(self) -> &'static str {
        match self {
            Self::Geography => "::geography",
            Self::Geometry => "::geometry",
        }
    }
}

impl fmt::Display for SpatialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql_type())
    }
}

/// An immutable spatial value tagged with its domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpatialValue {
    kind: SpatialKind,
    srid: Option<i32>,
    wkt: String,
}

impl SpatialValue {
    /// Create a value from its parts.
    ///
    /// The WKT body must be non-empty, start with a geometry keyword and
    /// must not contain quote characters.
    pub fn new(kind: SpatialKind, srid: Option<i32>, wkt: impl Into<String>) -> Result<Self> {
        let wkt = wkt.into();
        let body = wkt.trim();
        validate_wkt_body(body)?;
        Ok(Self {
            kind,
            srid,
            wkt: body.to_string(),
        })
    }

    /// Parse `SRID=<n>;<WKT>` or a bare `<WKT>`.
    pub fn from_ewkt(kind: SpatialKind, text: &str) -> Result<Self> {
        let captures = EWKT_REGEX
            .captures(text)
            .ok_or_else(|| GeoSqlError::invalid_ewkt(format!("cannot parse '{text}'")))?;

        let srid = match captures.get(1) {
            Some(m) => Some(m.as_str().parse::<i32>().map_err(|_| {
                GeoSqlError::invalid_ewkt(format!("SRID out of range: {}", m.as_str()))
            })?),
            None => None,
        };
        let body = captures.get(2).map_or("", |m| m.as_str());

        Self::new(kind, srid, body)
    }

    /// Geography value helper.
    pub fn geography(ewkt: &str) -> Result<Self> {
        Self::from_ewkt(SpatialKind::Geography, ewkt)
    }

    /// Geometry value helper.
    pub fn geometry(ewkt: &str) -> Result<Self> {
        Self::from_ewkt(SpatialKind::Geometry, ewkt)
    }

    pub fn kind(&self) -> SpatialKind {
        self.kind
    }

    pub fn srid(&self) -> Option<i32> {
        self.srid
    }

    pub fn wkt(&self) -> &str {
        &self.wkt
    }

    /// Render the value as Extended Well-Known Text.
    pub fn ewkt(&self) -> String {
        match self.srid {
            Some(srid) => format!("SRID={srid};{}", self.wkt),
            None => self.wkt.clone(),
        }
    }
}

impl fmt::Display for SpatialValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ewkt())
    }
}

fn validate_wkt_body(body: &str) -> Result<()> {
    if body.is_empty() {
        return Err(GeoSqlError::invalid_ewkt("empty geometry text"));
    }
    if !body.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(GeoSqlError::invalid_ewkt(format!(
            "geometry text must start with a type keyword: '{body}'"
        )));
    }
    if body.contains(['\'', '"', ';']) {
        return Err(GeoSqlError::invalid_ewkt(format!(
            "unexpected character in geometry text: '{body}'"
        )));
    }
    Ok(())
}
