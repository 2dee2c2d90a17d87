use std::collections::BTreeMap;
use tracing::debug;

use super::Config;

impl Config {
    /// Effective configuration as `key -> (value, source)`, sorted by key.
    #[must_use]
    pub fn effective_config(&self) -> BTreeMap<String, (String, String)> {
        let mut config = BTreeMap::new();
        let mut add = |key: &str, value: String| {
            config.insert(key.to_string(), (value, self.source_of(key).to_string()));
        };

        add("verbose", self.verbose().to_string());
        add("log_format", self.log_format().as_str().to_string());
        add("timeout_secs", self.telnet_timeout().as_secs().to_string());

        debug!(
            config_path = ?self.config_path,
            keys = config.len(),
            "Resolved effective configuration"
        );
        config
    }
}
