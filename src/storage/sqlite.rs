//! Employer store backed by a SQLite table.
//!
//! Owns the `employers` table: schema bootstrap, row mapping, identity
//! allocation and constraint enforcement. Every write is either a single
//! statement or a single transaction, so SQLite's own atomicity is never
//! weakened.

use crate::domain::employer::{Employer, EmployerField};
use crate::domain::error::{StoreError, StoreResult};
use crate::storage::schema::{CREATE_EMPLOYERS_TABLE_SQL, EMPLOYER_SELECT_SQL};
use sqlx::sqlite::{SqliteConnection, SqlitePool, SqliteRow};
use sqlx::Row;
use std::collections::HashSet;

/// Row-level primitives over the `employers` table.
#[derive(Clone)]
pub struct SqliteEmployerStore {
    pool: SqlitePool,
}

impl SqliteEmployerStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the table if it is absent. No-op otherwise.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(CREATE_EMPLOYERS_TABLE_SQL)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Removes every row. The identity sequence is not reset.
    pub async fn clear_all(&self) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM employers")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Inserts one row and returns it with the identity the store allocated.
    ///
    /// A caller-supplied `id` is ignored.
    pub async fn insert_row(&self, employer: &Employer) -> StoreResult<Employer> {
        let mut conn = self.pool.acquire().await?;
        let id = insert_on(&mut conn, employer).await?;
        Ok(persisted(employer, id))
    }

    /// Inserts a batch atomically: either every row is committed or none is.
    ///
    /// Two employers sharing a `name` in the same batch are rejected before
    /// anything is written.
    pub async fn insert_rows(&self, employers: &[Employer]) -> StoreResult<Vec<Employer>> {
        if employers.is_empty() {
            return Ok(Vec::new());
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(employers.len());
        for employer in employers {
            if let Some(name) = employer.name.as_deref() {
                if !seen.insert(name) {
                    return Err(StoreError::duplicate_name_in_batch(name));
                }
            }
        }

        // Dropping the transaction on an early return rolls it back.
        let mut tx = self.pool.begin().await?;
        let mut rows = Vec::with_capacity(employers.len());
        for employer in employers {
            let id = insert_on(&mut tx, employer).await?;
            rows.push(persisted(employer, id));
        }
        tx.commit().await?;

        Ok(rows)
    }

    pub async fn query_by_id(&self, id: i64) -> StoreResult<Option<Employer>> {
        let row = sqlx::query(&format!("{EMPLOYER_SELECT_SQL} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(employer_from_row).transpose()
    }

    /// Returns every row whose `field` equals `value`, ordered by id.
    pub async fn query_by_field(
        &self,
        field: EmployerField,
        value: &str,
    ) -> StoreResult<Vec<Employer>> {
        let sql = format!(
            "{EMPLOYER_SELECT_SQL} WHERE {} = ?1 ORDER BY id ASC",
            field.column()
        );
        let query = match field {
            EmployerField::Id => match value.trim().parse::<i64>() {
                Ok(id) => sqlx::query(&sql).bind(id),
                Err(_) => return Ok(Vec::new()),
            },
            _ => sqlx::query(&sql).bind(value),
        };
        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(employer_from_row).collect()
    }

    /// Returns all rows in insertion (id) order.
    pub async fn query_all(&self) -> StoreResult<Vec<Employer>> {
        let rows = sqlx::query(&format!("{EMPLOYER_SELECT_SQL} ORDER BY id ASC"))
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(employer_from_row).collect()
    }

    pub async fn count(&self) -> StoreResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employers")
            .fetch_one(&self.pool)
            .await?;
        u64::try_from(count).map_err(|_| StoreError::InvalidData(format!("negative count {count}")))
    }

    /// Overwrites every non-identity column of the row identified by
    /// `employer.id`. Returns the number of rows changed (0 when absent).
    pub async fn update_row(&self, employer: &Employer) -> StoreResult<u64> {
        let Some(id) = employer.id else {
            return Ok(0);
        };

        let result = sqlx::query(
            "UPDATE employers SET name = ?1, sector = ?2, summary = ?3 WHERE id = ?4",
        )
        .bind(employer.name.as_deref())
        .bind(employer.sector.as_deref())
        .bind(employer.summary.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Moves the row identified by `employer.id` to `new_id`.
    ///
    /// On success the in-memory id follows. When `new_id` already belongs to
    /// another row the primary key rejects the change and `employer` is left
    /// untouched.
    pub async fn update_identity(&self, employer: &mut Employer, new_id: i64) -> StoreResult<u64> {
        let Some(old_id) = employer.id else {
            return Ok(0);
        };

        let result = sqlx::query("UPDATE employers SET id = ?1 WHERE id = ?2")
            .bind(new_id)
            .bind(old_id)
            .execute(&self.pool)
            .await?;

        let changed = result.rows_affected();
        if changed > 0 {
            employer.id = Some(new_id);
        }
        Ok(changed)
    }

    /// Deletes strictly by id; the other fields are not compared. Deleting an
    /// absent id is a no-op.
    pub async fn delete_row(&self, employer: &Employer) -> StoreResult<u64> {
        let Some(id) = employer.id else {
            return Ok(0);
        };
        let mut conn = self.pool.acquire().await?;
        Ok(delete_on(&mut conn, id).await?)
    }

    /// Deletes each employer by id in one transaction, skipping unsaved
    /// employers and ids that do not exist.
    pub async fn delete_rows(&self, employers: &[Employer]) -> StoreResult<u64> {
        let ids: Vec<i64> = employers.iter().filter_map(|e| e.id).collect();
        if ids.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        let mut deleted = 0;
        for id in ids {
            deleted += delete_on(&mut tx, id).await?;
        }
        tx.commit().await?;

        Ok(deleted)
    }

    pub async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

async fn insert_on(conn: &mut SqliteConnection, employer: &Employer) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO employers (name, sector, summary) VALUES (?1, ?2, ?3)")
        .bind(employer.name.as_deref())
        .bind(employer.sector.as_deref())
        .bind(employer.summary.as_deref())
        .execute(&mut *conn)
        .await?;
    Ok(result.last_insert_rowid())
}

async fn delete_on(conn: &mut SqliteConnection, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM employers WHERE id = ?1")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected())
}

fn persisted(employer: &Employer, id: i64) -> Employer {
    Employer {
        id: Some(id),
        ..employer.clone()
    }
}

fn employer_from_row(row: &SqliteRow) -> StoreResult<Employer> {
    let name: Option<String> = row.try_get("name")?;
    if name.is_none() {
        return Err(StoreError::InvalidData(
            "null value in employers.name".to_string(),
        ));
    }

    Ok(Employer {
        id: Some(row.try_get("id")?),
        name,
        sector: row.try_get("sector")?,
        summary: row.try_get("summary")?,
    })
}
