use std::io;
use std::time::Duration;
use thiserror::Error;

/// Errors raised by the relay.
///
/// I/O failures on the socket are split into [`TelnetError::ConnectionClosed`]
/// (the peer went away) and [`TelnetError::Io`] (anything else) so callers can
/// report a closed connection as a normal end of session.
#[derive(Error, Debug)]
pub enum TelnetError {
    #[error("connection to {address} timed out after {timeout:?}")]
    Timeout { address: String, timeout: Duration },

    #[error("failed to connect to {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("client is not connected")]
    NotConnected,

    #[error("connection closed: {0}")]
    ConnectionClosed(#[source] io::Error),

    #[error("I/O error: {0}")]
    Io(#[source] io::Error),
}

impl TelnetError {
    /// Classify a socket error.
    #[must_use]
    pub fn from_io(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::BrokenPipe
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::NotConnected
            | io::ErrorKind::UnexpectedEof => Self::ConnectionClosed(err),
            _ => Self::Io(err),
        }
    }

    #[must_use]
    pub fn is_connection_closed(&self) -> bool {
        matches!(self, Self::ConnectionClosed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_classifies_closed_connections() {
        for kind in [
            io::ErrorKind::BrokenPipe,
            io::ErrorKind::ConnectionReset,
            io::ErrorKind::ConnectionAborted,
            io::ErrorKind::NotConnected,
            io::ErrorKind::UnexpectedEof,
        ] {
            let err = TelnetError::from_io(io::Error::from(kind));
            assert!(err.is_connection_closed(), "{kind:?} should mean closed");
        }
    }

    #[test]
    fn test_from_io_keeps_generic_failures() {
        let err = TelnetError::from_io(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, TelnetError::Io(_)));
        assert!(!err.is_connection_closed());
    }

    #[test]
    fn test_timeout_message_names_address() {
        let err = TelnetError::Timeout {
            address: "example.com:23".to_string(),
            timeout: Duration::from_secs(10),
        };
        assert_eq!(
            err.to_string(),
            "connection to example.com:23 timed out after 10s"
        );
    }
}
