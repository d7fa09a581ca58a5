use super::Error;

/// Error when an operation was canceled through its execution context,
/// either explicitly or because the context's deadline passed.
#[derive(Debug)]
pub(super) struct Canceled {
    deadline_exceeded: bool,
}

impl std::error::Error for Canceled {}

impl core::fmt::Display for Canceled {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.deadline_exceeded {
            f.write_str("operation canceled: deadline exceeded")
        } else {
            f.write_str("operation canceled")
        }
    }
}

impl Error {
    /// Creates an error for an explicitly canceled operation.
    pub fn canceled() -> Error {
        Error::from(super::ErrorKind::Canceled(Canceled {
            deadline_exceeded: false,
        }))
    }

    /// Creates an error for an operation whose deadline passed.
    pub fn deadline_exceeded() -> Error {
        Error::from(super::ErrorKind::Canceled(Canceled {
            deadline_exceeded: true,
        }))
    }

    /// Returns `true` if the operation was canceled, including by deadline.
    pub fn is_canceled(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Canceled(_))
    }

    /// Returns `true` if the operation was canceled because its deadline passed.
    pub fn is_deadline_exceeded(&self) -> bool {
        matches!(
            self.kind(),
            super::ErrorKind::Canceled(Canceled {
                deadline_exceeded: true
            })
        )
    }
}
