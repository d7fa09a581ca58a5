use super::Error;

/// Error when an operation requires a primary-key value that the record
/// does not carry, or requires a persisted record.
#[derive(Debug)]
pub(super) struct MissingPrimaryKey {
    model: Box<str>,
}

impl std::error::Error for MissingPrimaryKey {}

impl core::fmt::Display for MissingPrimaryKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "missing primary key for `{}`", self.model)
    }
}

impl Error {
    pub fn missing_primary_key(model: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingPrimaryKey(MissingPrimaryKey {
            model: model.into().into(),
        }))
    }

    pub fn is_missing_primary_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingPrimaryKey(_))
    }
}
