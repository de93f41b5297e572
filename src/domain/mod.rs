//! Domain types for the employer store.

pub mod employer;
pub mod error;
pub mod repository;

pub use employer::{Employer, EmployerField, UnknownField};
pub use error::{ConstraintKind, StoreError, StoreResult};
pub use repository::{CreateOrUpdateStatus, EmployerRepository};
