pub mod error;
pub mod identifier;
pub mod spatial;
pub mod value;

pub use error::{ErrorCategory, GeoSqlError, Result};
pub use identifier::QuoteStyle;
pub use spatial::{SpatialKind, SpatialValue};
pub use value::{SqlValue, quote_literal};
