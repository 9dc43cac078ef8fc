//! Tracing setup for hosts that do not install their own subscriber.
//!
//! The translator only emits `tracing` events. A host that already owns a
//! global subscriber can ignore this module; otherwise call [`init_tracing`]
//! with the `[logging]` section of the loaded [`TranslatorConfig`]:
//!
//! ```ignore
//! let translator = GisPostgresTranslator::from_config_file(None)?;
//! observability::init_tracing(&translator.config().logging);
//! ```
//!
//! [`TranslatorConfig`]: geosql_config::TranslatorConfig

use std::sync::OnceLock;

use geosql_config::LoggingConfig;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};

/// Reload handle of the subscriber installed here; `None` once another
/// global subscriber was found in place.
static FILTER_HANDLE: OnceLock<Option<reload::Handle<EnvFilter, Registry>>> = OnceLock::new();

/// Outcome of [`init_tracing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingInit {
    /// This call installed the global subscriber.
    Installed,
    /// A subscriber from an earlier call of this module was kept and its
    /// level replaced.
    Reloaded,
    /// Some other global subscriber is active; nothing changed.
    Foreign,
}

/// Install a global subscriber filtered at `config.level`.
///
/// `RUST_LOG` takes precedence over the configured level when it parses.
/// Repeated calls reuse the subscriber installed by the first one.
pub fn init_tracing(config: &LoggingConfig) -> TracingInit {
    init_tracing_with_level(&config.level)
}

pub fn init_tracing_with_level(level: &str) -> TracingInit {
    let mut installed = false;
    let handle = FILTER_HANDLE.get_or_init(|| {
        let (filter, rejected) = build_filter(level);
        let (reload_layer, handle) = reload::Layer::new(filter);

        if let Err(err) = tracing_subscriber::registry()
            .with(reload_layer)
            .with(fmt::layer())
            .try_init()
        {
            tracing::debug!(error = %err, "Global tracing subscriber already set, keeping it");
            return None;
        }

        if let Some(directive) = rejected {
            tracing::warn!(level = %directive, "Invalid logging level, using 'info'");
        }
        installed = true;
        Some(handle)
    });

    match handle {
        Some(_) if installed => TracingInit::Installed,
        Some(_) => {
            apply_logging_level(level);
            TracingInit::Reloaded
        }
        None => TracingInit::Foreign,
    }
}

/// Replace the active level of a subscriber installed by this module.
/// Returns `false` when there is no such subscriber or `level` does not
/// parse as a filter directive.
pub fn apply_logging_level(level: &str) -> bool {
    let Some(Some(handle)) = FILTER_HANDLE.get() else {
        return false;
    };
    let filter = match EnvFilter::try_new(level) {
        Ok(filter) => filter,
        Err(err) => {
            tracing::warn!(level, error = %err, "Ignoring invalid logging level");
            return false;
        }
    };
    match handle.reload(filter) {
        Ok(()) => {
            tracing::debug!(level, "Logging level changed");
            true
        }
        Err(err) => {
            tracing::warn!(error = %err, "Failed to reload logging level");
            false
        }
    }
}

/// Filter for `level`, plus the directive text when it was rejected.
fn build_filter(level: &str) -> (EnvFilter, Option<String>) {
    if std::env::var_os("RUST_LOG").is_some() {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return (filter, None);
        }
    }
    match EnvFilter::try_new(level) {
        Ok(filter) => (filter, None),
        Err(_) => (EnvFilter::new("info"), Some(level.to_owned())),
    }
}
