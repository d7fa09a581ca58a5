use super::Error;

/// Error when an association's foreign-key attribute is absent from the
/// catalog of the model that stores it.
///
/// Reported at traversal time, never at declaration time, since the model
/// that stores the key may not exist yet when the association is declared.
#[derive(Debug)]
pub(super) struct MissingForeignKey {
    model: Box<str>,
    association: Box<str>,
    foreign_key: Box<str>,
}

impl std::error::Error for MissingForeignKey {}

impl core::fmt::Display for MissingForeignKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "association `{}` expects foreign key `{}` on model `{}`",
            self.association, self.foreign_key, self.model
        )
    }
}

impl Error {
    pub fn missing_foreign_key(
        model: impl Into<String>,
        association: impl Into<String>,
        foreign_key: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::MissingForeignKey(MissingForeignKey {
            model: model.into().into(),
            association: association.into().into(),
            foreign_key: foreign_key.into().into(),
        }))
    }

    pub fn is_missing_foreign_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingForeignKey(_))
    }
}
