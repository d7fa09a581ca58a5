use super::Error;

/// Error when a model is defined under a name that is already registered.
#[derive(Debug)]
pub(super) struct DuplicateModel {
    name: Box<str>,
}

impl std::error::Error for DuplicateModel {}

impl core::fmt::Display for DuplicateModel {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "model `{}` is already defined", self.name)
    }
}

impl Error {
    pub fn duplicate_model(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DuplicateModel(DuplicateModel {
            name: name.into().into(),
        }))
    }

    pub fn is_duplicate_model(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateModel(_))
    }
}
