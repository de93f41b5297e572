//! Error taxonomy shared by the repository contract and its implementations.

use std::fmt;
use thiserror::Error;

/// Which kind of table constraint rejected a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// A `NOT NULL` column received null.
    NotNull,
    /// A uniqueness key collided (`id`, or `name` within one batch insert).
    Unique,
    Other,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintKind::NotNull => f.write_str("not null"),
            ConstraintKind::Unique => f.write_str("unique"),
            ConstraintKind::Other => f.write_str("other"),
        }
    }
}

/// Errors returned by the employer store and repository.
///
/// Absence is never an error here: a missing row is reported as `None` or as
/// zero rows affected.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("constraint violation ({kind}): {message}")]
    ConstraintViolation { kind: ConstraintKind, message: String },

    /// Store unreachable, pool closed, or the connection failed mid-operation.
    #[error("store unavailable: {0}")]
    Transport(#[source] sqlx::Error),

    #[error("invalid persisted employer data: {0}")]
    InvalidData(String),
}

impl StoreError {
    pub fn duplicate_name_in_batch(name: &str) -> Self {
        StoreError::ConstraintViolation {
            kind: ConstraintKind::Unique,
            message: format!("employer name `{name}` appears more than once in the batch"),
        }
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, StoreError::ConstraintViolation { .. })
    }

    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            StoreError::ConstraintViolation { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
