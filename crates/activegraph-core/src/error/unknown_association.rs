use super::Error;

#[derive(Debug)]
pub(super) struct UnknownAssociation {
    model: Box<str>,
    association: Box<str>,
}

impl std::error::Error for UnknownAssociation {}

impl core::fmt::Display for UnknownAssociation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "model `{}` has no association `{}`",
            self.model, self.association
        )
    }
}

impl Error {
    pub fn unknown_association(model: impl Into<String>, association: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownAssociation(UnknownAssociation {
            model: model.into().into(),
            association: association.into().into(),
        }))
    }

    pub fn is_unknown_association(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownAssociation(_))
    }
}
