use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use coursework_utils::types::{ConfigSource, LogFormat};

/// Telnet dial timeout used when nothing else is configured
pub const DEFAULT_TELNET_TIMEOUT_SECS: u64 = coursework_telnet::DEFAULT_TIMEOUT_SECS;

/// Upper bound accepted for the telnet dial timeout
pub const MAX_TELNET_TIMEOUT_SECS: u64 = 3600;

/// `[defaults]` section
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    /// Raise log verbosity to debug for coursework crates
    pub verbose: Option<bool>,
    /// Log record format
    pub log_format: Option<LogFormat>,
}

/// `[telnet]` section
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TelnetConfig {
    /// Dial timeout in seconds
    pub timeout_secs: Option<u64>,
}

/// Effective configuration for one CLI invocation.
///
/// Built by [`Config::discover()`] (CLI > config file > defaults) or by
/// [`Config::builder()`](crate::ConfigBuilder) for programmatic use. Every
/// value records where it came from in `source_attribution`.
///
/// ```toml
/// [defaults]
/// verbose = true
/// log_format = "json"
///
/// [telnet]
/// timeout_secs = 5
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub defaults: Defaults,
    pub telnet: TelnetConfig,
    /// Config file the values were read from, if any
    pub config_path: Option<PathBuf>,
    pub source_attribution: HashMap<String, ConfigSource>,
}

impl Config {
    #[must_use]
    pub fn verbose(&self) -> bool {
        self.defaults.verbose.unwrap_or(false)
    }

    #[must_use]
    pub fn log_format(&self) -> LogFormat {
        self.defaults.log_format.unwrap_or_default()
    }

    #[must_use]
    pub fn telnet_timeout(&self) -> Duration {
        Duration::from_secs(
            self.telnet
                .timeout_secs
                .unwrap_or(DEFAULT_TELNET_TIMEOUT_SECS),
        )
    }

    /// Source of a configuration key, `Default` when it was never set.
    #[must_use]
    pub fn source_of(&self, key: &str) -> ConfigSource {
        self.source_attribution
            .get(key)
            .copied()
            .unwrap_or(ConfigSource::Default)
    }
}
