use anyhow::{Context, Result};
use std::time::Duration;
use tokio::io::BufReader;
use tracing::info;

use crate::telnet::{SessionEnd, TelnetClient, run_session};
use crate::{Config, CourseworkError};

/// Relay stdin to `host:port` and the peer's bytes to stdout.
///
/// Progress notices go to stderr so stdout carries only peer data.
pub fn execute_telnet_command(host: &str, port: u16, config: &Config) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
    let result = runtime.block_on(relay(host_port(host, port), config.telnet_timeout()));
    // A pending stdin read sits on a blocking thread and must not hold up exit
    runtime.shutdown_background();
    result
}

async fn relay(address: String, timeout: Duration) -> Result<()> {
    let mut client = TelnetClient::new(address.clone(), timeout);
    client.connect().await.map_err(CourseworkError::from)?;
    eprintln!("...Connected to {address}");

    let input = BufReader::new(tokio::io::stdin());
    let output = tokio::io::stdout();

    tokio::select! {
        end = run_session(client, input, output) => match end {
            Ok(SessionEnd::LocalEof) => eprintln!("...EOF"),
            Ok(SessionEnd::PeerClosed) => eprintln!("...Connection was closed by peer"),
            Err(err) if err.is_connection_closed() => {
                eprintln!("...Connection was closed by peer");
            }
            Err(err) => return Err(CourseworkError::from(err).into()),
        },
        _ = tokio::signal::ctrl_c() => {
            info!(address = %address, "Interrupted");
            eprintln!("...Interrupted");
        }
    }

    Ok(())
}

/// Join host and port, bracketing bare IPv6 literals.
fn host_port(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_port() {
        assert_eq!(host_port("localhost", 4242), "localhost:4242");
        assert_eq!(host_port("127.0.0.1", 23), "127.0.0.1:23");
        assert_eq!(host_port("::1", 23), "[::1]:23");
        assert_eq!(host_port("[::1]", 23), "[::1]:23");
    }
}
