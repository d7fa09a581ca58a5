use super::Error;

/// Error when a statement cannot be compiled to SQL.
///
/// This occurs when:
/// - A predicate, projection or ordering names an attribute the model does not have
/// - A grouped attribute is not selected, or a selected attribute is not grouped
/// - A raw fragment's placeholder count does not match its argument count
/// - A record is asked to perform a transition its status does not allow
///
/// These errors are always reported before any adapter call.
#[derive(Debug)]
pub(super) struct CompilationError {
    message: Box<str>,
}

impl std::error::Error for CompilationError {}

impl core::fmt::Display for CompilationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "compilation failed: {}", self.message)
    }
}

impl Error {
    pub fn compilation(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Compilation(CompilationError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a compilation error.
    pub fn is_compilation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Compilation(_))
    }
}
