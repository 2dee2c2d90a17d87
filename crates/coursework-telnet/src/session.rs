use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::info;

use crate::client::TelnetClient;
use crate::error::TelnetError;

/// Which side ended the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Local input hit EOF; the socket was half-closed afterwards.
    LocalEof,
    /// The remote host closed its side.
    PeerClosed,
}

/// Relay `input` to the connected host and the host's replies to `output`
/// until either side finishes.
pub async fn run_session<R, W>(
    client: TelnetClient,
    input: R,
    output: W,
) -> Result<SessionEnd, TelnetError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let address = client.address().to_string();
    let (mut sender, mut receiver) = client.into_pumps()?;

    let end = tokio::select! {
        sent = sender.pump(input) => {
            sent?;
            SessionEnd::LocalEof
        }
        received = receiver.pump(output) => {
            received?;
            SessionEnd::PeerClosed
        }
    };

    if end == SessionEnd::LocalEof {
        sender.close().await?;
    }

    info!(address = %address, end = ?end, "Session finished");
    Ok(end)
}
