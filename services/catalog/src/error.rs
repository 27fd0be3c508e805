use sea_orm::{DbErr, TransactionError};

use netlab_core::storage::{StorageViolation, classify};

/// Catalog error variants. Constraint failures are whatever the storage
/// engine reports; everything else is internal.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CatalogError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UniqueViolation(_) => "UNIQUE_VIOLATION",
            Self::ForeignKeyViolation(_) => "FOREIGN_KEY_VIOLATION",
            Self::Config(_) => "CONFIG",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Classify a database error, attaching `context` when it is not a
    /// constraint violation.
    pub fn from_db(err: DbErr, context: &'static str) -> Self {
        match classify(&err) {
            Some(StorageViolation::Unique(detail)) => Self::UniqueViolation(detail),
            Some(StorageViolation::ForeignKey(detail)) => Self::ForeignKeyViolation(detail),
            None => Self::Internal(anyhow::Error::new(err).context(context)),
        }
    }
}

/// `map_err` adapter for plain database calls.
pub(crate) fn db_err(context: &'static str) -> impl FnOnce(DbErr) -> CatalogError {
    move |err| CatalogError::from_db(err, context)
}

/// `map_err` adapter for `DatabaseConnection::transaction`.
pub(crate) fn txn_err(
    context: &'static str,
) -> impl FnOnce(TransactionError<DbErr>) -> CatalogError {
    move |err| match err {
        TransactionError::Connection(err) | TransactionError::Transaction(err) => {
            CatalogError::from_db(err, context)
        }
    }
}
