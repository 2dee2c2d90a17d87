//! coursework: run-length string unpacking plus a few small I/O exercises.
//!
//! The heavy lifting lives in the workspace crates; this crate wires them
//! together behind the `coursework` binary.
//!
//! - [`unpack`] expands packed strings such as `a4bc2d5e` into `aaaabccddddde`.
//! - [`reverse`] reverses text by Unicode scalar values.
//! - [`telnet`] relays stdin to a TCP peer and the peer back to stdout.
//! - [`domainstat`] counts user email hosts under a domain.

pub mod cli;

pub use coursework_config::{CliArgs, Config, ConfigBuilder, ConfigSource};
pub use coursework_domainstat as domainstat;
pub use coursework_reverse as reverse;
pub use coursework_telnet as telnet;
pub use coursework_unpack as unpack;
pub use coursework_utils::error::{CourseworkError, ErrorCategory, UserFriendlyError};
pub use coursework_utils::exit_codes::ExitCode;
pub use coursework_utils::{error, exit_codes, logging, types};
