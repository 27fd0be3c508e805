use sea_orm::{DbErr, SqlErr};

/// Constraint failure reported by the storage engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageViolation {
    /// Primary key or unique column conflict.
    Unique(String),
    /// Referenced row does not exist (or is still referenced on delete).
    ForeignKey(String),
}

/// Map a raw database error onto a constraint violation, if it is one.
///
/// Works across backends: sea-orm recognizes the Postgres, MySQL and SQLite
/// error codes for both kinds of violation.
pub fn classify(err: &DbErr) -> Option<StorageViolation> {
    match err.sql_err()? {
        SqlErr::UniqueConstraintViolation(detail) => Some(StorageViolation::Unique(detail)),
        SqlErr::ForeignKeyConstraintViolation(detail) => {
            Some(StorageViolation::ForeignKey(detail))
        }
        _ => None,
    }
}
