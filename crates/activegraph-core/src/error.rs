mod adapter_execution_failed;
mod adapter_unknown;
mod adhoc;
mod canceled;
mod compilation;
mod connection_failed;
mod duplicate_model;
mod invalid_database_config;
mod invalid_schema;
mod missing_foreign_key;
mod missing_primary_key;
mod type_conversion;
mod unknown_association;
mod unknown_connection;
mod unknown_model;

use adapter_execution_failed::AdapterExecutionFailed;
use adapter_unknown::AdapterUnknown;
use adhoc::AdhocError;
use canceled::Canceled;
use compilation::CompilationError;
use connection_failed::ConnectionFailed;
use duplicate_model::DuplicateModel;
use invalid_database_config::InvalidDatabaseConfig;
use invalid_schema::InvalidSchema;
use missing_foreign_key::MissingForeignKey;
use missing_primary_key::MissingPrimaryKey;
use std::sync::Arc;
use type_conversion::TypeConversionError;
use unknown_association::UnknownAssociation;
use unknown_connection::UnknownConnection;
use unknown_model::UnknownModel;

/// Returns early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur in activegraph.
///
/// Errors are cheap to clone so that a record can keep the reason for a
/// failed operation around for later inspection.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match consequent.inner {
            Some(inner) => match Arc::try_unwrap(inner) {
                Ok(inner) => {
                    assert!(
                        inner.cause.is_none(),
                        "consequent error must not already have a cause"
                    );
                    inner.kind
                }
                Err(shared) => ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
            },
            None => ErrorKind::Unknown,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            })),
        }
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        let mut err = self;
        while let Some(cause) = err.inner.as_ref().and_then(|inner| inner.cause.as_ref()) {
            err = cause;
        }
        err
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// Returns `true` if this error was raised while compiling a statement,
    /// before any adapter was called.
    pub fn is_compilation_time(&self) -> bool {
        self.chain().any(|err| {
            matches!(
                err.kind(),
                ErrorKind::Compilation(_)
                    | ErrorKind::TypeConversion(_)
                    | ErrorKind::UnknownModel(_)
                    | ErrorKind::UnknownAssociation(_)
                    | ErrorKind::MissingForeignKey(_)
                    | ErrorKind::MissingPrimaryKey(_)
            )
        })
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::AdapterExecutionFailed(err) => Some(err),
            ErrorKind::ConnectionFailed(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    AdapterExecutionFailed(AdapterExecutionFailed),
    AdapterUnknown(AdapterUnknown),
    Canceled(Canceled),
    Compilation(CompilationError),
    ConnectionFailed(ConnectionFailed),
    DuplicateModel(DuplicateModel),
    InvalidDatabaseConfig(InvalidDatabaseConfig),
    InvalidSchema(InvalidSchema),
    MissingForeignKey(MissingForeignKey),
    MissingPrimaryKey(MissingPrimaryKey),
    TypeConversion(TypeConversionError),
    UnknownAssociation(UnknownAssociation),
    UnknownConnection(UnknownConnection),
    UnknownModel(UnknownModel),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            AdapterExecutionFailed(err) => core::fmt::Display::fmt(err, f),
            AdapterUnknown(err) => core::fmt::Display::fmt(err, f),
            Canceled(err) => core::fmt::Display::fmt(err, f),
            Compilation(err) => core::fmt::Display::fmt(err, f),
            ConnectionFailed(err) => core::fmt::Display::fmt(err, f),
            DuplicateModel(err) => core::fmt::Display::fmt(err, f),
            InvalidDatabaseConfig(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            MissingForeignKey(err) => core::fmt::Display::fmt(err, f),
            MissingPrimaryKey(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            UnknownAssociation(err) => core::fmt::Display::fmt(err, f),
            UnknownConnection(err) => core::fmt::Display::fmt(err, f),
            UnknownModel(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown activegraph error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Error {
        Error::invalid_database_config(err.to_string())
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for &str {
    fn into_error(self) -> Error {
        Error::from_args(format_args!("{self}"))
    }
}

impl IntoError for String {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self)))
    }
}
