use serde::{Deserialize, Serialize};
use std::fmt;

/// Source of a configuration value.
///
/// Indicates where a configuration value originated from in the precedence chain:
/// CLI arguments > config file > programmatic overrides > built-in defaults.
///
/// # Serialization
///
/// Serializes to lowercase strings: `"cli"`, `"config"`, `"programmatic"`, `"default"`.
///
/// # Example
///
/// ```rust
/// use coursework_utils::types::ConfigSource;
///
/// let source = ConfigSource::Cli;
/// let json = serde_json::to_string(&source).unwrap();
/// assert_eq!(json, r#""cli""#);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    /// Value provided via CLI argument (highest precedence).
    Cli,
    /// Value loaded from configuration file.
    Config,
    /// Value provided programmatically (e.g., `Config::builder()`).
    Programmatic,
    /// Built-in default value (lowest precedence).
    Default,
}

impl ConfigSource {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cli => "cli",
            Self::Config => "config",
            Self::Programmatic => "programmatic",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log output format for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line human-readable records
    #[default]
    #[serde(alias = "text")]
    Compact,
    /// One JSON object per record
    Json,
}

impl LogFormat {
    /// Parse a format name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not recognized.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "compact" | "text" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(format!(
                "Unknown log format '{s}'. Available formats: compact, json"
            )),
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Json => "json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_source_serializes_lowercase() {
        for (source, expected) in [
            (ConfigSource::Cli, "\"cli\""),
            (ConfigSource::Config, "\"config\""),
            (ConfigSource::Programmatic, "\"programmatic\""),
            (ConfigSource::Default, "\"default\""),
        ] {
            assert_eq!(serde_json::to_string(&source).unwrap(), expected);
            assert_eq!(format!("\"{source}\""), expected);
        }
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("compact").unwrap(), LogFormat::Compact);
        assert_eq!(LogFormat::parse("TEXT").unwrap(), LogFormat::Compact);
        assert_eq!(LogFormat::parse("Json").unwrap(), LogFormat::Json);
        assert!(LogFormat::parse("yaml").is_err());
    }

    #[test]
    fn test_log_format_deserializes_same_names_as_parse() {
        for (name, expected) in [
            ("compact", LogFormat::Compact),
            ("text", LogFormat::Compact),
            ("json", LogFormat::Json),
        ] {
            let parsed: LogFormat = serde_json::from_str(&format!("\"{name}\"")).unwrap();
            assert_eq!(parsed, expected);
            assert_eq!(LogFormat::parse(name).unwrap(), expected);
        }
    }

    #[test]
    fn test_log_format_as_str_round_trips() {
        for format in [LogFormat::Compact, LogFormat::Json] {
            assert_eq!(LogFormat::parse(format.as_str()).unwrap(), format);
        }
    }
}
