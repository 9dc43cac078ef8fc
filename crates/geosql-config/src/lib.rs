//! Configuration for the GeoSQL translation layer.
//!
//! - [`config`]: serde types with defaults and validation
//! - [`loader`]: TOML file + environment loading via the `config` crate
//! - [`error`]: configuration errors

pub mod config;
pub mod error;
pub mod loader;

pub use crate::config::{IdentifierConfig, LoggingConfig, SelectConfig, TranslatorConfig};
pub use crate::error::ConfigError;
pub use crate::loader::{load_config, load_config_with_default_path};
