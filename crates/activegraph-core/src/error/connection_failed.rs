use super::Error;

/// Error when the adapter cannot connect, or reports that its connection
/// is closed.
#[derive(Debug)]
pub(super) struct ConnectionFailed {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ConnectionFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ConnectionFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "connection failed: {}", self.inner)
    }
}

impl Error {
    pub fn connection_failed(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Error {
        Error::from(super::ErrorKind::ConnectionFailed(ConnectionFailed {
            inner: err.into(),
        }))
    }

    pub fn is_connection_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConnectionFailed(_))
    }
}
