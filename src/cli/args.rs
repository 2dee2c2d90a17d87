//! CLI argument definitions and parsing structures
//!
//! This module defines the command-line interface structure using clap,
//! including the main `Cli` struct and the subcommand enum.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::LogFormat;

/// coursework - packed-string unpacking and small I/O exercises
#[derive(Parser, Debug)]
#[command(name = "coursework")]
#[command(about = "Unpack run-length strings, relay TCP sessions, and count email domains")]
#[command(long_about = r#"
coursework bundles a run-length string unpacker with a handful of small
I/O utilities behind one binary.

EXAMPLES:
  # Expand a packed string
  coursework unpack 'a4bc2d5e'

  # Escapes make digits and backslashes literal
  coursework unpack 'qwe\45'

  # Read the packed string from stdin
  printf 'a4bc2d5e' | coursework unpack

  # Reverse the greeting
  coursework reverse

  # Relay stdin to a TCP peer
  coursework telnet localhost 4242 --timeout 3

  # Count user email hosts under a domain
  coursework domain-stat com --file users.jsonl

CONFIGURATION:
  Configuration is loaded with precedence: CLI flags > config file > defaults
  The config file is $COURSEWORK_HOME/config.toml or the nearest
  .coursework/config.toml searching upward from the current directory.
  Use --config to specify an explicit config file path.
"#)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (overrides discovery)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format (compact or json)
    #[arg(long, global = true, value_parser = LogFormat::parse)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expand a packed string (reads stdin when TEXT is omitted)
    Unpack {
        /// Packed string, e.g. `a4bc2d5e`
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,

        /// Output the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Reverse text by Unicode scalar values
    Reverse {
        /// Text to reverse (defaults to the greeting)
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
    },

    /// Relay stdin to a TCP peer and the peer's bytes to stdout
    Telnet {
        /// Host name or IP address
        host: String,

        /// TCP port
        port: u16,

        /// Dial timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Count user email hosts under a domain from JSON-lines records
    DomainStat {
        /// Domain suffix to match, e.g. `com`
        domain: String,

        /// Read records from a file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration and where each value came from
    Config {
        /// Output the result as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Name used for the command span.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unpack { .. } => "unpack",
            Self::Reverse { .. } => "reverse",
            Self::Telnet { .. } => "telnet",
            Self::DomainStat { .. } => "domain-stat",
            Self::Config { .. } => "config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_unpack_accepts_leading_hyphen() {
        let cli = Cli::try_parse_from(["coursework", "unpack", "-3"]).unwrap();
        match cli.command {
            Commands::Unpack { text, json } => {
                assert_eq!(text.as_deref(), Some("-3"));
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "coursework",
            "domain-stat",
            "com",
            "--verbose",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        assert_eq!(cli.command.name(), "domain-stat");
    }

    #[test]
    fn test_telnet_requires_numeric_port() {
        assert!(Cli::try_parse_from(["coursework", "telnet", "localhost", "http"]).is_err());

        let cli =
            Cli::try_parse_from(["coursework", "telnet", "localhost", "4242", "--timeout", "3"])
                .unwrap();
        match cli.command {
            Commands::Telnet {
                host,
                port,
                timeout,
            } => {
                assert_eq!(host, "localhost");
                assert_eq!(port, 4242);
                assert_eq!(timeout, Some(3));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        assert!(Cli::try_parse_from(["coursework", "--log-format", "yaml", "reverse"]).is_err());
    }
}
