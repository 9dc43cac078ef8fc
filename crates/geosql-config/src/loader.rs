//! Layered configuration loading: optional TOML file, then `GEOSQL__*`
//! environment overrides (e.g. `GEOSQL__SELECT__EWKT_FUNCTION=ST_AsText`).

use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File};

use crate::config::TranslatorConfig;
use crate::error::ConfigError;

/// File picked up when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "geosql.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "GEOSQL";

pub fn load_config(path: Option<&str>) -> Result<TranslatorConfig, ConfigError> {
    let mut builder = Config::builder();
    let file = match path {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(DEFAULT_CONFIG_FILE),
    };
    if file.exists() {
        tracing::debug!(path = %file.display(), "Loading translator config file");
        builder = builder.add_source(File::from(file));
    } else if path.is_some() {
        tracing::warn!(path = %file.display(), "Config file not found, using defaults");
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .separator("__"),
    );

    let cfg = builder.build()?;
    let merged: TranslatorConfig = cfg
        .try_deserialize()
        .map_err(|e| ConfigError::Deserialize(e.to_string()))?;
    merged.validate()?;
    Ok(merged)
}

pub fn load_config_with_default_path<P: AsRef<Path>>(
    path: Option<P>,
) -> Result<TranslatorConfig, ConfigError> {
    let p = path
        .as_ref()
        .map(|p| p.as_ref().to_string_lossy().to_string());
    load_config(p.as_deref())
}
