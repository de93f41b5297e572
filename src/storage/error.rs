//! Mapping of sqlx failures onto the store error taxonomy.

use crate::domain::error::{ConstraintKind, StoreError};

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        let kind = match &err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::NotNullViolation => Some(ConstraintKind::NotNull),
                ErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
                ErrorKind::ForeignKeyViolation | ErrorKind::CheckViolation => {
                    Some(ConstraintKind::Other)
                }
                _ => classify_message(db_err.message()),
            },
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::ColumnNotFound(_) => {
                return StoreError::InvalidData(err.to_string());
            }
            _ => None,
        };

        match kind {
            Some(kind) => StoreError::ConstraintViolation {
                kind,
                message: err.to_string(),
            },
            None => StoreError::Transport(err),
        }
    }
}

/// SQLite reports constraint failures as `<KIND> constraint failed: <table>.<column>`.
fn classify_message(message: &str) -> Option<ConstraintKind> {
    if message.starts_with("NOT NULL constraint failed") {
        Some(ConstraintKind::NotNull)
    } else if message.starts_with("UNIQUE constraint failed") {
        Some(ConstraintKind::Unique)
    } else if message.contains("constraint failed") {
        Some(ConstraintKind::Other)
    } else {
        None
    }
}
