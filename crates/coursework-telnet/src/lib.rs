//! Line-oriented TCP relay
//!
//! A minimal telnet-style client: it dials a host with a timeout, then runs
//! two half-duplex pumps concurrently, local input to the socket and socket
//! to local output. Each pump forwards whole lines and flushes after every
//! line.
//!
//! The session ends when either side finishes:
//! - local EOF (Ctrl+D) half-closes the socket so the peer sees end of stream
//! - the peer closing its side ends the session without touching local input
//!
//! # Example
//!
//! ```rust,no_run
//! use coursework_telnet::{SessionEnd, TelnetClient, run_session};
//! use std::time::Duration;
//! use tokio::io::BufReader;
//!
//! # async fn demo() -> Result<(), coursework_telnet::TelnetError> {
//! let mut client = TelnetClient::new("localhost:4242", Duration::from_secs(10));
//! client.connect().await?;
//!
//! let stdin = BufReader::new(tokio::io::stdin());
//! match run_session(client, stdin, tokio::io::stdout()).await? {
//!     SessionEnd::LocalEof => eprintln!("...EOF"),
//!     SessionEnd::PeerClosed => eprintln!("...Connection was closed by peer"),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod session;

pub use client::{Receiver, Sender, TelnetClient};
pub use error::TelnetError;
pub use session::{SessionEnd, run_session};

/// Dial timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
