use super::Error;

/// Error when the storage adapter fails to execute a compiled statement.
///
/// This wraps the error reported by the underlying engine library (for
/// example `rusqlite`) when a statement is rejected or fails mid-way.
#[derive(Debug)]
pub(super) struct AdapterExecutionFailed {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for AdapterExecutionFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for AdapterExecutionFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("adapter execution failed: ")?;
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from an adapter execution failure.
    ///
    /// Adapters use this to convert engine-specific errors into activegraph
    /// errors.
    pub fn adapter_execution_failed(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::AdapterExecutionFailed(
            AdapterExecutionFailed {
                inner: Box::new(err),
            },
        ))
    }

    /// Returns `true` if this error is an adapter execution failure.
    pub fn is_adapter_execution_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::AdapterExecutionFailed(_))
    }
}
