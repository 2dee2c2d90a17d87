use coursework_utils::error::ConfigError;

use super::{Config, MAX_TELNET_TIMEOUT_SECS};

impl Config {
    /// Validate configuration values
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if let Some(timeout_secs) = self.telnet.timeout_secs {
            if timeout_secs == 0 {
                return Err(ConfigError::InvalidValue {
                    key: "timeout_secs".to_string(),
                    value: "must be at least 1 second".to_string(),
                });
            }
            if timeout_secs > MAX_TELNET_TIMEOUT_SECS {
                return Err(ConfigError::InvalidValue {
                    key: "timeout_secs".to_string(),
                    value: format!("exceeds maximum limit of {MAX_TELNET_TIMEOUT_SECS} seconds"),
                });
            }
        }

        Ok(())
    }
}
