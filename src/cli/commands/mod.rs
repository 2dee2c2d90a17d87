//! CLI command implementations (facade).
//!
//! This module re-exports the command surface used by `run.rs`.
//! Implementations live in `commands/*`.

mod config;
mod domain_stat;
mod reverse;
mod telnet;
mod unpack;

pub use config::execute_config_command;
pub use domain_stat::execute_domain_stat_command;
pub use reverse::execute_reverse_command;
pub use telnet::execute_telnet_command;
pub use unpack::execute_unpack_command;
