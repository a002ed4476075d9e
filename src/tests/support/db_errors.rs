//! Synthetic Postgres errors, shaped the way sqlx reports them, for
//! exercising constraint classification without a live database.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use sea_orm::{DbErr, RuntimeErr};
use sqlx::error::{DatabaseError, ErrorKind};

#[derive(Debug)]
struct FakePgError {
    code: &'static str,
    constraint: String,
    kind: ErrorKind,
}

impl fmt::Display for FakePgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "constraint \"{}\" violated", self.constraint)
    }
}

impl StdError for FakePgError {}

impl DatabaseError for FakePgError {
    fn message(&self) -> &str {
        "constraint violated"
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.code))
    }

    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
        self
    }

    fn constraint(&self) -> Option<&str> {
        Some(&self.constraint)
    }

    fn kind(&self) -> ErrorKind {
        match self.kind {
            ErrorKind::UniqueViolation => ErrorKind::UniqueViolation,
            ErrorKind::ForeignKeyViolation => ErrorKind::ForeignKeyViolation,
            _ => ErrorKind::Other,
        }
    }
}

fn query_error(code: &'static str, constraint: &str, kind: ErrorKind) -> DbErr {
    let err = FakePgError {
        code,
        constraint: constraint.to_string(),
        kind,
    };
    DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(Box::new(err))))
}

/// SQLSTATE 23505 on `constraint`.
pub fn unique_violation(constraint: &str) -> DbErr {
    query_error("23505", constraint, ErrorKind::UniqueViolation)
}

/// SQLSTATE 23503 on `constraint`.
pub fn foreign_key_violation(constraint: &str) -> DbErr {
    query_error("23503", constraint, ErrorKind::ForeignKeyViolation)
}
