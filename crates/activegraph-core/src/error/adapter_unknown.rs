use super::Error;

/// Error when a connection is requested for an adapter kind that no
/// registered driver provides.
#[derive(Debug)]
pub(super) struct AdapterUnknown {
    adapter: Box<str>,
}

impl std::error::Error for AdapterUnknown {}

impl core::fmt::Display for AdapterUnknown {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown adapter `{}`", self.adapter)
    }
}

impl Error {
    pub fn adapter_unknown(adapter: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::AdapterUnknown(AdapterUnknown {
            adapter: adapter.into().into(),
        }))
    }

    pub fn is_adapter_unknown(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::AdapterUnknown(_))
    }
}
