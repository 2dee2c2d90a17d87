use std::collections::HashMap;
use std::time::Duration;

use coursework_utils::error::ConfigError;
use coursework_utils::types::{ConfigSource, LogFormat};

use super::{Config, Defaults, TelnetConfig};

impl Config {
    /// Create a builder for programmatic configuration.
    ///
    /// Use this when configuration must not depend on the environment or on
    /// config files.
    ///
    /// ```rust
    /// use coursework_config::Config;
    /// use std::time::Duration;
    ///
    /// let config = Config::builder()
    ///     .telnet_timeout(Duration::from_secs(3))
    ///     .verbose(true)
    ///     .build()
    ///     .expect("Failed to build config");
    /// assert_eq!(config.telnet_timeout(), Duration::from_secs(3));
    /// ```
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for programmatic configuration.
///
/// All values set via the builder are attributed to
/// `ConfigSource::Programmatic`.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    verbose: Option<bool>,
    log_format: Option<LogFormat>,
    telnet_timeout: Option<Duration>,
}

impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    #[must_use]
    pub fn log_format(mut self, format: LogFormat) -> Self {
        self.log_format = Some(format);
        self
    }

    /// Set the telnet dial timeout. Sub-second precision is truncated.
    #[must_use]
    pub fn telnet_timeout(mut self, timeout: Duration) -> Self {
        self.telnet_timeout = Some(timeout);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let mut source_attribution = HashMap::new();
        let mut attribute = |key: &str, set: bool| {
            let source = if set {
                ConfigSource::Programmatic
            } else {
                ConfigSource::Default
            };
            source_attribution.insert(key.to_string(), source);
        };
        attribute("verbose", self.verbose.is_some());
        attribute("log_format", self.log_format.is_some());
        attribute("timeout_secs", self.telnet_timeout.is_some());

        let config = Config {
            defaults: Defaults {
                verbose: self.verbose,
                log_format: self.log_format,
            },
            telnet: TelnetConfig {
                timeout_secs: self.telnet_timeout.map(|t| t.as_secs()),
            },
            config_path: None,
            source_attribution,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_attributes_programmatic_values() {
        let config = Config::builder()
            .log_format(LogFormat::Json)
            .build()
            .unwrap();

        assert_eq!(config.log_format(), LogFormat::Json);
        assert_eq!(config.source_of("log_format"), ConfigSource::Programmatic);
        assert_eq!(config.source_of("verbose"), ConfigSource::Default);
    }

    #[test]
    fn test_builder_validates_timeout() {
        let err = Config::builder()
            .telnet_timeout(Duration::from_millis(500))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        let err = Config::builder()
            .telnet_timeout(Duration::from_secs(7200))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
