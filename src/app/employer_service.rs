//! The employer service.
//!
//! Sits between the HTTP transport and the SQLite store. It is responsible for:
//! 1.  Opening the pool and bootstrapping the `employers` table.
//! 2.  Writing store-allocated identities back into caller entities.
//! 3.  Emitting one structured log event per operation.

use crate::domain::employer::{Employer, EmployerField};
use crate::domain::error::{StoreError, StoreResult};
use crate::domain::repository::{CreateOrUpdateStatus, EmployerRepository};
use crate::infra::config::DatabaseConfig;
use crate::storage::pool;
use crate::storage::sqlite::SqliteEmployerStore;
use async_trait::async_trait;
use std::time::Instant;

/// The main service that manages employer persistence.
#[derive(Clone)]
pub struct EmployerService {
    store: SqliteEmployerStore,
}

impl EmployerService {
    pub fn new(store: SqliteEmployerStore) -> Self {
        Self { store }
    }

    /// Connects to the database described by `config` and makes sure the
    /// `employers` table exists.
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let pool = pool::connect(config).await?;
        let store = SqliteEmployerStore::new(pool);
        store.ensure_schema().await?;
        Ok(Self::new(store))
    }

    /// Shorthand for a service over a fresh private in-memory database.
    pub async fn in_memory() -> StoreResult<Self> {
        Self::connect(&DatabaseConfig::in_memory()).await
    }

    pub async fn ensure_schema(&self) -> StoreResult<()> {
        let started_at = Instant::now();
        let result = self.store.ensure_schema().await;
        log_outcome("ensure_schema", started_at, &result);
        result
    }

    /// Closes the pool; every later call fails with `StoreError::Transport`.
    pub async fn close(&self) {
        self.store.close().await;
        tracing::info!(event = "db_close", status = "ok");
    }
}

#[async_trait]
impl EmployerRepository for EmployerService {
    async fn create(&self, employer: &mut Employer) -> StoreResult<i64> {
        let started_at = Instant::now();
        if employer.id.is_some() {
            tracing::debug!(
                event = "employer_create",
                requested_id = ?employer.id,
                "caller-supplied id is replaced by the store"
            );
        }

        let result = self.store.insert_row(employer).await;
        log_outcome("employer_create", started_at, &result);

        let row = result?;
        let id = row.id.ok_or_else(|| {
            StoreError::InvalidData("inserted employer has no id".to_string())
        })?;
        *employer = row;
        Ok(id)
    }

    async fn create_batch(&self, employers: &mut [Employer]) -> StoreResult<usize> {
        let started_at = Instant::now();
        let result = self.store.insert_rows(employers).await;
        log_outcome("employer_create_batch", started_at, &result);

        let rows = result?;
        for (employer, row) in employers.iter_mut().zip(rows) {
            *employer = row;
        }
        Ok(employers.len())
    }

    async fn create_or_update(&self, employer: &mut Employer) -> StoreResult<CreateOrUpdateStatus> {
        // Decided by rows changed; a row removed since the caller read it is re-inserted.
        if employer.id.is_some() && self.update(employer).await? > 0 {
            return Ok(CreateOrUpdateStatus::Updated);
        }

        self.create(employer).await?;
        Ok(CreateOrUpdateStatus::Created)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Employer>> {
        let started_at = Instant::now();
        let result = self.store.query_by_id(id).await;
        log_outcome("employer_find_by_id", started_at, &result);
        result
    }

    async fn find_by_field(&self, field: EmployerField, value: &str) -> StoreResult<Vec<Employer>> {
        let started_at = Instant::now();
        let result = self.store.query_by_field(field, value).await;
        log_outcome("employer_find_by_field", started_at, &result);
        result
    }

    async fn list_all(&self) -> StoreResult<Vec<Employer>> {
        let started_at = Instant::now();
        let result = self.store.query_all().await;
        log_outcome("employer_list_all", started_at, &result);
        result
    }

    async fn count(&self) -> StoreResult<u64> {
        let started_at = Instant::now();
        let result = self.store.count().await;
        log_outcome("employer_count", started_at, &result);
        result
    }

    async fn update(&self, employer: &Employer) -> StoreResult<u64> {
        let started_at = Instant::now();
        let result = self.store.update_row(employer).await;
        log_outcome("employer_update", started_at, &result);
        result
    }

    async fn update_identity(&self, employer: &mut Employer, new_id: i64) -> StoreResult<u64> {
        let started_at = Instant::now();
        let old_id = employer.id;
        let result = self.store.update_identity(employer, new_id).await;
        log_outcome("employer_update_identity", started_at, &result);
        if let Err(err) = &result {
            tracing::warn!(
                event = "employer_update_identity",
                old_id = ?old_id,
                new_id,
                error = %err,
                "identity change rejected"
            );
        }
        result
    }

    async fn delete(&self, employer: &Employer) -> StoreResult<u64> {
        let started_at = Instant::now();
        let result = self.store.delete_row(employer).await;
        log_outcome("employer_delete", started_at, &result);
        result
    }

    async fn delete_batch(&self, employers: &[Employer]) -> StoreResult<u64> {
        let started_at = Instant::now();
        let result = self.store.delete_rows(employers).await;
        log_outcome("employer_delete_batch", started_at, &result);
        result
    }

    async fn clear_all(&self) -> StoreResult<u64> {
        let started_at = Instant::now();
        let result = self.store.clear_all().await;
        log_outcome("employer_clear_all", started_at, &result);
        result
    }

    async fn ping(&self) -> StoreResult<()> {
        let started_at = Instant::now();
        let result = self.store.ping().await;
        log_outcome("db_ping", started_at, &result);
        result
    }
}

fn log_outcome<T>(event: &'static str, started_at: Instant, result: &StoreResult<T>) {
    let duration_ms = started_at.elapsed().as_millis() as u64;
    match result {
        Ok(_) => tracing::debug!(event, status = "ok", duration_ms),
        Err(StoreError::ConstraintViolation { kind, message }) => tracing::info!(
            event,
            status = "rejected",
            duration_ms,
            constraint = %kind,
            error = %message
        ),
        Err(err) => tracing::error!(event, status = "error", duration_ms, error = %err),
    }
}
