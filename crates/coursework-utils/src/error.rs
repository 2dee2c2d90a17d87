use std::fmt;
use std::io;
use thiserror::Error;

pub use coursework_domainstat::DomainStatError;
pub use coursework_telnet::TelnetError;
pub use coursework_unpack::UnpackError;

use crate::exit_codes::ExitCode;

/// Top-level error type for coursework operations.
///
/// Wraps the error of each exercise crate and adds:
/// - user-friendly messages with context and suggestions
/// - mapping to CLI exit codes
///
/// # Exit Code Mapping
///
/// | Exit Code | Error Type |
/// |-----------|------------|
/// | 2 | Configuration errors |
/// | 3 | `Unpack` |
/// | 4 | `DomainStat` malformed record |
/// | 5 | `Telnet` connection failures |
/// | 6 | `Telnet` dial timeout |
/// | 1 | Other errors |
///
/// Library code returns `CourseworkError` and does NOT call `std::process::exit()`.
#[derive(Error, Debug)]
pub enum CourseworkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unpack error: {0}")]
    Unpack(#[from] UnpackError),

    #[error("Telnet error: {0}")]
    Telnet(#[from] TelnetError),

    #[error("Domain statistics error: {0}")]
    DomainStat(#[from] DomainStatError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Trait for providing user-friendly error reporting with context and suggestions
pub trait UserFriendlyError {
    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get contextual information about the error
    fn context(&self) -> Option<String>;

    /// Get suggested actions to resolve the error
    fn suggestions(&self) -> Vec<String>;

    /// Get the error category for grouping similar errors
    fn category(&self) -> ErrorCategory;
}

/// Categories of errors for better organization and handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    InputValidation,
    Network,
    FileSystem,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::InputValidation => write!(f, "Input Validation"),
            Self::Network => write!(f, "Network"),
            Self::FileSystem => write!(f, "File System"),
        }
    }
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration file {path}: {reason}")]
    InvalidFile { path: String, reason: String },

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found at {path}")]
    NotFound { path: String },

    #[error("Configuration discovery failed: {reason}")]
    DiscoveryFailed { reason: String },
}

impl UserFriendlyError for ConfigError {
    fn user_message(&self) -> String {
        match self {
            Self::InvalidFile { path, reason } => {
                format!("Configuration file {path} has invalid format: {reason}")
            }
            Self::InvalidValue { key, value } => {
                format!("Configuration '{key}' has invalid value: {value}")
            }
            Self::NotFound { path } => format!("Configuration file not found: {path}"),
            Self::DiscoveryFailed { reason } => {
                format!("Failed to discover configuration: {reason}")
            }
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::InvalidFile { .. } => Some(
                "Configuration files must be valid TOML with optional [defaults] and [telnet] sections."
                    .to_string(),
            ),
            Self::InvalidValue { key, .. } => Some(format!(
                "The '{key}' configuration option has specific format requirements."
            )),
            Self::NotFound { .. } | Self::DiscoveryFailed { .. } => Some(
                "coursework reads --config, then $COURSEWORK_HOME/config.toml, then searches for .coursework/config.toml upward from the current directory."
                    .to_string(),
            ),
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFile { .. } => vec![
                "Check the TOML syntax using a TOML validator".to_string(),
                "Remove unknown keys from the file".to_string(),
            ],
            Self::InvalidValue { key, .. } => match key.as_str() {
                "timeout_secs" => vec![
                    "Use a whole number of seconds between 1 and 3600".to_string(),
                    "Override per run with --timeout".to_string(),
                ],
                "log_format" => vec!["Use 'compact' or 'json'".to_string()],
                _ => vec!["Remove the option to use the default value".to_string()],
            },
            Self::NotFound { .. } => vec![
                "Check the path passed to --config".to_string(),
                "Omit --config to fall back to discovery and defaults".to_string(),
            ],
            Self::DiscoveryFailed { .. } => vec![
                "Check read permissions on the current directory and its parents".to_string(),
                "Use --config <path> to specify configuration file explicitly".to_string(),
            ],
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }
}

impl UserFriendlyError for UnpackError {
    fn user_message(&self) -> String {
        "Input is not a valid packed string".to_string()
    }

    fn context(&self) -> Option<String> {
        Some(
            "Each character may be followed by one ASCII digit; a backslash may only escape a digit or another backslash."
                .to_string(),
        )
    }

    fn suggestions(&self) -> Vec<String> {
        vec![
            "Do not start the input with a digit".to_string(),
            "Use a single digit per repeat count (a9a1 instead of a10)".to_string(),
            r"Escape literal digits and backslashes: \4, \\".to_string(),
            "Make sure the input is valid UTF-8".to_string(),
        ]
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::InputValidation
    }
}

impl UserFriendlyError for TelnetError {
    fn user_message(&self) -> String {
        match self {
            Self::Timeout { address, timeout } => {
                format!("Could not reach {address} within {}s", timeout.as_secs())
            }
            Self::Connect { address, source } => {
                format!("Could not connect to {address}: {source}")
            }
            Self::NotConnected => "Telnet client used before connecting".to_string(),
            Self::ConnectionClosed(_) => "Connection was closed by peer".to_string(),
            Self::Io(source) => format!("Telnet I/O failed: {source}"),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::Timeout { .. } | Self::Connect { .. } => {
                Some("The dial is bounded by the telnet timeout.".to_string())
            }
            _ => None,
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Timeout { .. } => vec![
                "Check that the host is reachable".to_string(),
                "Increase the timeout with --timeout or [telnet] timeout_secs".to_string(),
            ],
            Self::Connect { .. } => vec![
                "Check the host name and port".to_string(),
                "Make sure a server is listening on that port".to_string(),
            ],
            _ => Vec::new(),
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Network
    }
}

impl UserFriendlyError for DomainStatError {
    fn user_message(&self) -> String {
        match self {
            Self::EmptyDomain => "Domain must not be empty".to_string(),
            Self::Io(source) => format!("Failed to read user records: {source}"),
            Self::MalformedRecord { line, source } => {
                format!("User record on line {line} is not valid JSON: {source}")
            }
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::MalformedRecord { .. } => Some(
                "Input must contain one JSON object per line with an \"Email\" field.".to_string(),
            ),
            _ => None,
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyDomain => vec!["Pass a domain such as 'com' or 'org'".to_string()],
            Self::Io(_) => vec!["Check that the input file exists and is readable".to_string()],
            Self::MalformedRecord { .. } => {
                vec!["Validate the input with a JSON-lines linter".to_string()]
            }
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Io(_) => ErrorCategory::FileSystem,
            _ => ErrorCategory::InputValidation,
        }
    }
}

impl UserFriendlyError for CourseworkError {
    fn user_message(&self) -> String {
        match self {
            Self::Config(err) => err.user_message(),
            Self::Unpack(err) => err.user_message(),
            Self::Telnet(err) => err.user_message(),
            Self::DomainStat(err) => err.user_message(),
            Self::Io(err) => format!("I/O operation failed: {err}"),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::Config(err) => err.context(),
            Self::Unpack(err) => err.context(),
            Self::Telnet(err) => err.context(),
            Self::DomainStat(err) => err.context(),
            Self::Io(_) => None,
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config(err) => err.suggestions(),
            Self::Unpack(err) => err.suggestions(),
            Self::Telnet(err) => err.suggestions(),
            Self::DomainStat(err) => err.suggestions(),
            Self::Io(_) => vec!["Check file paths and permissions".to_string()],
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(err) => err.category(),
            Self::Unpack(err) => err.category(),
            Self::Telnet(err) => err.category(),
            Self::DomainStat(err) => err.category(),
            Self::Io(_) => ErrorCategory::FileSystem,
        }
    }
}

impl CourseworkError {
    /// Get a user-friendly error message with context and actionable suggestions
    #[must_use]
    pub fn display_for_user(&self) -> String {
        let mut output = format!("Error: {}\n", self.user_message());
        output.push_str(&format!("Category: {}\n", self.category()));

        if let Some(ctx) = self.context() {
            output.push_str(&format!("\nContext: {ctx}\n"));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in suggestions {
                output.push_str(&format!("  • {suggestion}\n"));
            }
        }

        output
    }

    /// Map this error to the appropriate CLI exit code.
    #[must_use]
    pub fn to_exit_code(&self) -> ExitCode {
        match self {
            Self::Config(_) => ExitCode::CLI_ARGS,
            Self::Unpack(_) => ExitCode::INVALID_STRING,
            Self::DomainStat(DomainStatError::MalformedRecord { .. }) => {
                ExitCode::MALFORMED_RECORD
            }
            Self::DomainStat(DomainStatError::EmptyDomain) => ExitCode::CLI_ARGS,
            Self::Telnet(TelnetError::Timeout { .. }) => ExitCode::CONNECTION_TIMEOUT,
            Self::Telnet(TelnetError::NotConnected) => ExitCode::INTERNAL,
            Self::Telnet(_) => ExitCode::CONNECTION_FAILED,
            Self::DomainStat(DomainStatError::Io(_)) | Self::Io(_) => ExitCode::INTERNAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_exit_code_mapping() {
        let cases: Vec<(CourseworkError, ExitCode)> = vec![
            (
                ConfigError::NotFound {
                    path: "x.toml".to_string(),
                }
                .into(),
                ExitCode::CLI_ARGS,
            ),
            (UnpackError::InvalidString.into(), ExitCode::INVALID_STRING),
            (DomainStatError::EmptyDomain.into(), ExitCode::CLI_ARGS),
            (
                TelnetError::Timeout {
                    address: "h:1".to_string(),
                    timeout: Duration::from_secs(1),
                }
                .into(),
                ExitCode::CONNECTION_TIMEOUT,
            ),
            (
                TelnetError::from_io(io::Error::from(io::ErrorKind::ConnectionReset)).into(),
                ExitCode::CONNECTION_FAILED,
            ),
            (
                io::Error::other("disk on fire").into(),
                ExitCode::INTERNAL,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.to_exit_code(), expected, "wrong exit code for {err}");
        }
    }

    #[test]
    fn test_display_for_user_includes_suggestions() {
        let err = CourseworkError::from(UnpackError::InvalidString);
        let text = err.display_for_user();
        assert!(text.starts_with("Error: Input is not a valid packed string"));
        assert!(text.contains("Category: Input Validation\n"));
        assert!(text.contains("Context:"));
        assert!(text.contains("Suggestions:"));
        assert_eq!(err.category(), ErrorCategory::InputValidation);
    }

    #[test]
    fn test_config_suggestions_are_key_specific() {
        let err = ConfigError::InvalidValue {
            key: "timeout_secs".to_string(),
            value: "0".to_string(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("--timeout")));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_closed_connection_message() {
        let err = CourseworkError::from(TelnetError::from_io(io::Error::from(
            io::ErrorKind::BrokenPipe,
        )));
        assert_eq!(err.user_message(), "Connection was closed by peer");
        assert_eq!(err.category(), ErrorCategory::Network);
        assert!(err.display_for_user().contains("Category: Network"));
    }
}
