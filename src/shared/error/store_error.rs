/// Raw outcome classes a repository may report. Repositories never attach
/// business meaning; the services decide what a violated constraint means.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("No rows matched the query")]
    NoRows,

    #[error("Unique constraint `{constraint}` violated")]
    UniqueViolation { constraint: String },

    #[error("Foreign key constraint `{constraint}` violated")]
    ForeignKeyViolation { constraint: String },

    #[error("Database error: {0}")]
    Other(String),
}
