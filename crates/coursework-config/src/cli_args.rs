use std::path::PathBuf;

use coursework_utils::types::LogFormat;

/// Configuration overrides taken from the command line.
///
/// `None` means "not given"; such values fall through to the config file and
/// then to built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub verbose: Option<bool>,
    pub log_format: Option<LogFormat>,
    pub telnet_timeout_secs: Option<u64>,
}
