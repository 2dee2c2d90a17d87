//! Configuration management for coursework
//!
//! Hierarchical configuration with discovery and precedence:
//! CLI > file > defaults. Supports TOML configuration files with
//! `[defaults]` and `[telnet]` sections.

mod builder;
mod cli_args;
mod discovery;
mod model;
mod sources;
mod validation;

pub use builder::ConfigBuilder;
pub use cli_args::CliArgs;
pub use discovery::{CONFIG_DIR, CONFIG_FILE, HOME_ENV};
pub use model::*;
pub use coursework_utils::types::ConfigSource;
