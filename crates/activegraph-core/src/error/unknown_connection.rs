use super::Error;

/// Error when a connection name is not registered, or a connection handle
/// is used after its name was removed.
#[derive(Debug)]
pub(super) struct UnknownConnection {
    name: Box<str>,
}

impl std::error::Error for UnknownConnection {}

impl core::fmt::Display for UnknownConnection {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown connection `{}`", self.name)
    }
}

impl Error {
    pub fn unknown_connection(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownConnection(UnknownConnection {
            name: name.into().into(),
        }))
    }

    pub fn is_unknown_connection(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownConnection(_))
    }
}
