use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::time::timeout;
use tracing::{debug, trace};

use crate::error::TelnetError;

/// TCP client that is split into two pumps once connected.
#[derive(Debug)]
pub struct TelnetClient {
    address: String,
    timeout: Duration,
    stream: Option<TcpStream>,
}

impl TelnetClient {
    /// Create a client for `address` (`host:port`). No I/O happens until
    /// [`connect`](Self::connect).
    #[must_use]
    pub fn new(address: impl Into<String>, timeout: Duration) -> Self {
        Self {
            address: address.into(),
            timeout,
            stream: None,
        }
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Dial the remote host, giving up after the configured timeout.
    pub async fn connect(&mut self) -> Result<(), TelnetError> {
        let stream = match timeout(self.timeout, TcpStream::connect(&self.address)).await {
            Ok(Ok(stream)) => stream,
            Ok(Err(source)) => {
                return Err(TelnetError::Connect {
                    address: self.address.clone(),
                    source,
                });
            }
            Err(_) => {
                return Err(TelnetError::Timeout {
                    address: self.address.clone(),
                    timeout: self.timeout,
                });
            }
        };

        debug!(address = %self.address, "Connected");
        self.stream = Some(stream);
        Ok(())
    }

    /// Split the connection into its outbound and inbound halves.
    pub fn into_pumps(self) -> Result<(Sender, Receiver), TelnetError> {
        let stream = self.stream.ok_or(TelnetError::NotConnected)?;
        let (read_half, write_half) = stream.into_split();
        Ok((
            Sender { writer: write_half },
            Receiver {
                reader: BufReader::new(read_half),
            },
        ))
    }
}

/// Outbound pump: local input to socket.
#[derive(Debug)]
pub struct Sender {
    writer: OwnedWriteHalf,
}

impl Sender {
    /// Forward `input` to the socket one line at a time until `input` is
    /// exhausted. Returns the number of bytes sent.
    pub async fn pump<R>(&mut self, mut input: R) -> Result<u64, TelnetError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut line = Vec::new();
        let mut total = 0u64;

        loop {
            line.clear();
            let read = input
                .read_until(b'\n', &mut line)
                .await
                .map_err(TelnetError::Io)?;
            if read == 0 {
                debug!(bytes = total, "Local input reached EOF");
                return Ok(total);
            }

            self.writer
                .write_all(&line)
                .await
                .map_err(TelnetError::from_io)?;
            self.writer.flush().await.map_err(TelnetError::from_io)?;
            total += read as u64;
            trace!(bytes = read, "Sent line");
        }
    }

    /// Half-close the socket so the peer sees end of stream.
    pub async fn close(mut self) -> Result<(), TelnetError> {
        self.writer.shutdown().await.map_err(TelnetError::from_io)
    }
}

/// Inbound pump: socket to local output.
#[derive(Debug)]
pub struct Receiver {
    reader: BufReader<OwnedReadHalf>,
}

impl Receiver {
    /// Copy lines from the socket into `output` until the peer closes its
    /// side. Returns the number of bytes received.
    pub async fn pump<W>(&mut self, mut output: W) -> Result<u64, TelnetError>
    where
        W: AsyncWrite + Unpin,
    {
        let mut line = Vec::new();
        let mut total = 0u64;

        loop {
            line.clear();
            let read = self
                .reader
                .read_until(b'\n', &mut line)
                .await
                .map_err(TelnetError::from_io)?;
            if read == 0 {
                debug!(bytes = total, "Peer closed the connection");
                return Ok(total);
            }

            output.write_all(&line).await.map_err(TelnetError::Io)?;
            output.flush().await.map_err(TelnetError::Io)?;
            total += read as u64;
            trace!(bytes = read, "Received line");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    async fn bind_local() -> (TcpListener, String) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();
        (listener, address)
    }

    #[tokio::test]
    async fn test_sender_forwards_lines_and_half_closes() {
        let (listener, address) = bind_local().await;
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = String::new();
            socket.read_to_string(&mut received).await.unwrap();
            received
        });

        let mut client = TelnetClient::new(address, Duration::from_secs(5));
        client.connect().await.unwrap();

        let (mut sender, _receiver) = client.into_pumps().unwrap();
        let sent = sender.pump(&b"hello\nworld\n"[..]).await.unwrap();
        sender.close().await.unwrap();

        assert_eq!(sent, 12);
        assert_eq!(server.await.unwrap(), "hello\nworld\n");
    }

    #[tokio::test]
    async fn test_receiver_copies_until_peer_closes() {
        let (listener, address) = bind_local().await;
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            socket.write_all(b"first\nsecond").await.unwrap();
        });

        let mut client = TelnetClient::new(address, Duration::from_secs(5));
        client.connect().await.unwrap();
        let (_sender, mut receiver) = client.into_pumps().unwrap();

        let mut output = Vec::new();
        let received = receiver.pump(&mut output).await.unwrap();
        server.await.unwrap();

        assert_eq!(received, 12);
        assert_eq!(output, b"first\nsecond");
    }

    #[tokio::test]
    async fn test_connect_refused() {
        let (listener, address) = bind_local().await;
        drop(listener);

        let mut client = TelnetClient::new(address.clone(), Duration::from_secs(5));
        let err = client.connect().await.unwrap_err();
        match err {
            TelnetError::Connect { address: failed, .. } => assert_eq!(failed, address),
            other => panic!("expected connect error, got {other:?}"),
        }
        assert!(matches!(client.into_pumps(), Err(TelnetError::NotConnected)));
    }

    #[test]
    fn test_pumps_require_connection() {
        let client = TelnetClient::new("127.0.0.1:1", Duration::from_secs(1));
        assert_eq!(client.address(), "127.0.0.1:1");
        assert!(matches!(
            client.into_pumps(),
            Err(TelnetError::NotConnected)
        ));
    }
}
