//! The CRUD contract offered to upper layers.

use crate::domain::employer::{Employer, EmployerField};
use crate::domain::error::StoreResult;
use async_trait::async_trait;

/// Outcome of [`EmployerRepository::create_or_update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOrUpdateStatus {
    Created,
    Updated,
}

/// Trait that defines the contract for employer persistence.
///
/// Absent rows are never errors: reads return `None` or an empty list, and
/// writes report zero rows affected. Constraint failures surface as
/// `StoreError::ConstraintViolation` and are never swallowed.
#[async_trait]
pub trait EmployerRepository: Send + Sync {
    /// Persists `employer` and writes the allocated identity back into it.
    async fn create(&self, employer: &mut Employer) -> StoreResult<i64>;

    /// Persists every employer or none of them. On success each entity
    /// carries its allocated identity.
    async fn create_batch(&self, employers: &mut [Employer]) -> StoreResult<usize>;

    /// Overwrites the row with `employer.id` when it exists, inserts otherwise.
    async fn create_or_update(&self, employer: &mut Employer) -> StoreResult<CreateOrUpdateStatus>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Employer>>;

    async fn find_by_field(&self, field: EmployerField, value: &str) -> StoreResult<Vec<Employer>>;

    async fn list_all(&self) -> StoreResult<Vec<Employer>>;

    async fn count(&self) -> StoreResult<u64>;

    /// Full-record overwrite keyed on `employer.id`.
    async fn update(&self, employer: &Employer) -> StoreResult<u64>;

    /// Changes only the identity; the entity follows on success.
    async fn update_identity(&self, employer: &mut Employer, new_id: i64) -> StoreResult<u64>;

    /// Deletes by id only. Absent ids are a no-op.
    async fn delete(&self, employer: &Employer) -> StoreResult<u64>;

    async fn delete_batch(&self, employers: &[Employer]) -> StoreResult<u64>;

    /// Removes every row. Meant for test isolation.
    async fn clear_all(&self) -> StoreResult<u64>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
