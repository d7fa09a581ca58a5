use super::Error;

#[derive(Debug)]
pub(super) struct UnknownModel {
    name: Box<str>,
}

impl std::error::Error for UnknownModel {}

impl core::fmt::Display for UnknownModel {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown model `{}`", self.name)
    }
}

impl Error {
    pub fn unknown_model(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownModel(UnknownModel {
            name: name.into().into(),
        }))
    }

    pub fn is_unknown_model(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownModel(_))
    }
}
