use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use coursework_utils::error::ConfigError;
use coursework_utils::types::ConfigSource;

use super::{CliArgs, Config, Defaults, TelnetConfig};

/// Environment variable naming a directory that holds `config.toml`
pub const HOME_ENV: &str = "COURSEWORK_HOME";

/// Directory searched for upward from the working directory
pub const CONFIG_DIR: &str = ".coursework";

pub const CONFIG_FILE: &str = "config.toml";

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    defaults: Option<Defaults>,
    telnet: Option<TelnetConfig>,
}

impl Config {
    /// Discover and load configuration with precedence: CLI > file > defaults
    ///
    /// Uses the current working directory and `COURSEWORK_HOME` for config
    /// file discovery when no explicit path is provided in `cli_args`.
    pub fn discover(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let start_dir = env::current_dir().map_err(|e| ConfigError::DiscoveryFailed {
            reason: format!("cannot read current directory: {e}"),
        })?;
        let home = env::var_os(HOME_ENV).map(PathBuf::from);
        Self::discover_from(&start_dir, home.as_deref(), cli_args)
    }

    /// Discover and load configuration from explicit locations.
    ///
    /// This is the path-driven variant used by tests to avoid process-global
    /// state. Lookup order for the file: `cli_args.config_path`, then
    /// `home/config.toml`, then `.coursework/config.toml` upward from
    /// `start_dir`.
    pub fn discover_from(
        start_dir: &Path,
        home: Option<&Path>,
        cli_args: &CliArgs,
    ) -> Result<Self, ConfigError> {
        let mut source_attribution = HashMap::new();
        let mut defaults = Defaults::default();
        let mut telnet = TelnetConfig::default();

        source_attribution.insert("verbose".to_string(), ConfigSource::Default);
        source_attribution.insert("log_format".to_string(), ConfigSource::Default);
        source_attribution.insert("timeout_secs".to_string(), ConfigSource::Default);

        let config_path = match &cli_args.config_path {
            Some(explicit) => {
                if !explicit.is_file() {
                    return Err(ConfigError::NotFound {
                        path: explicit.display().to_string(),
                    });
                }
                Some(explicit.clone())
            }
            None => home
                .map(|dir| dir.join(CONFIG_FILE))
                .filter(|path| path.is_file())
                .or_else(|| Self::discover_config_file_from(start_dir)),
        };

        if let Some(path) = &config_path {
            let file_config = Self::load_config_file(path)?;

            if let Some(file_defaults) = file_config.defaults {
                if file_defaults.verbose.is_some() {
                    defaults.verbose = file_defaults.verbose;
                    source_attribution.insert("verbose".to_string(), ConfigSource::Config);
                }
                if file_defaults.log_format.is_some() {
                    defaults.log_format = file_defaults.log_format;
                    source_attribution.insert("log_format".to_string(), ConfigSource::Config);
                }
            }

            if let Some(file_telnet) = file_config.telnet
                && file_telnet.timeout_secs.is_some()
            {
                telnet.timeout_secs = file_telnet.timeout_secs;
                source_attribution.insert("timeout_secs".to_string(), ConfigSource::Config);
            }
        }

        // CLI overrides
        if let Some(verbose) = cli_args.verbose {
            defaults.verbose = Some(verbose);
            source_attribution.insert("verbose".to_string(), ConfigSource::Cli);
        }
        if let Some(log_format) = cli_args.log_format {
            defaults.log_format = Some(log_format);
            source_attribution.insert("log_format".to_string(), ConfigSource::Cli);
        }
        if let Some(timeout_secs) = cli_args.telnet_timeout_secs {
            telnet.timeout_secs = Some(timeout_secs);
            source_attribution.insert("timeout_secs".to_string(), ConfigSource::Cli);
        }

        let config = Config {
            defaults,
            telnet,
            config_path,
            source_attribution,
        };
        config.validate()?;
        Ok(config)
    }

    /// Search upward from `start_dir` for `.coursework/config.toml`,
    /// stopping at the filesystem root or a repository root.
    #[must_use]
    pub fn discover_config_file_from(start_dir: &Path) -> Option<PathBuf> {
        for dir in start_dir.ancestors() {
            let candidate = dir.join(CONFIG_DIR).join(CONFIG_FILE);
            if candidate.is_file() {
                return Some(candidate);
            }

            if dir.join(".git").exists() || dir.join(".hg").exists() || dir.join(".svn").exists()
            {
                break;
            }
        }
        None
    }

    fn load_config_file(path: &Path) -> Result<TomlConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::InvalidFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::InvalidFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
