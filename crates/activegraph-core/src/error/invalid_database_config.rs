use super::Error;

#[derive(Debug)]
pub(super) struct InvalidDatabaseConfig {
    message: Box<str>,
}

impl std::error::Error for InvalidDatabaseConfig {}

impl core::fmt::Display for InvalidDatabaseConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid database config: {}", self.message)
    }
}

impl Error {
    pub fn invalid_database_config(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidDatabaseConfig(
            InvalidDatabaseConfig {
                message: message.into().into(),
            },
        ))
    }

    pub fn is_invalid_database_config(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidDatabaseConfig(_))
    }
}
