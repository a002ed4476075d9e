use serde::Serialize;
use std::error::Error as StdError;
use std::sync::Arc;

/// Coarse classification of a [`ServiceError`], stable across the process
/// boundary. Transport adapters map these to protocol status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    MissingField,
    DuplicateValue,
    NotFound,
    WrongPassword,
    ReferenceViolation,
    Internal,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::MissingField => "MISSING_FIELD",
            ErrorKind::DuplicateValue => "DUPLICATE_VALUE",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::WrongPassword => "WRONG_PASSWORD",
            ErrorKind::ReferenceViolation => "REFERENCE_VIOLATION",
            ErrorKind::Internal => "INTERNAL_ERROR",
        }
    }
}

/// Error returned by every account and gender service operation.
///
/// The `Display` output is safe to hand to untrusted callers: `Internal`
/// only shows its context, the underlying cause is reachable through
/// [`std::error::Error::source`] for logging.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceError {
    #[error("Required field `{0}` is empty")]
    MissingField(&'static str),

    #[error("Value of `{0}` is already in use")]
    DuplicateValue(&'static str),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Wrong password")]
    WrongPassword,

    #[error("Referenced {0} does not exist or is still in use")]
    ReferenceViolation(&'static str),

    #[error("Internal error: {context}")]
    Internal {
        context: &'static str,
        #[source]
        source: Arc<dyn StdError + Send + Sync>,
    },
}

impl ServiceError {
    pub fn internal<E>(context: &'static str, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        ServiceError::Internal {
            context,
            source: Arc::new(source),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::MissingField(_) => ErrorKind::MissingField,
            ServiceError::DuplicateValue(_) => ErrorKind::DuplicateValue,
            ServiceError::NotFound(_) => ErrorKind::NotFound,
            ServiceError::WrongPassword => ErrorKind::WrongPassword,
            ServiceError::ReferenceViolation(_) => ErrorKind::ReferenceViolation,
            ServiceError::Internal { .. } => ErrorKind::Internal,
        }
    }
}
