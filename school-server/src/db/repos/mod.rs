//! Repository implementations for database access
//!
//! One generic [`Repo`] serves every entity. An entity plugs in through:
//! - [`Table`]: table name, key column, and row mapping (by column name)
//! - [`Insert`]: writable columns, value binding, add-time rules
//! - [`Update`]: update-time rules
//! - [`Removable`]: opt-in to delete
//!
//! Patterns:
//! - Reads map rows by column name; a value that fails to decode fails the
//!   whole list/find
//! - Deletes and updates branch on rows affected (no check-then-write)
//! - Find reports absence as `None`, never as a zero-value record

pub mod teachers;
pub mod students;
pub mod courses;

use std::marker::PhantomData;

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{FromRow, PgPool, Postgres, Row};

use crate::models::ValidationError;

pub use courses::CourseRepo;
pub use students::StudentRepo;
pub use teachers::TeacherRepo;

/// A parameterized Postgres statement awaiting its bound values.
pub type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl DbError {
    fn not_found<T: Table>(id: i32) -> Self {
        Self::NotFound {
            resource: T::RESOURCE,
            id: id.to_string(),
        }
    }
}

/// A record type backed by one table with an integer primary key.
pub trait Table: for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static {
    /// Table name
    const TABLE: &'static str;
    /// Primary key column, generated by the database on insert
    const KEY: &'static str;
    /// Singular noun for errors and logs
    const RESOURCE: &'static str;
}

/// Tables whose rows may be deleted. Courses are deliberately absent.
pub trait Removable: Table {}

/// Client-supplied fields that can be written to `Self::Record`'s table.
pub trait Insert: Sync {
    type Record: Table;

    /// Written columns, in the order [`bind`](Insert::bind) binds them.
    const COLUMNS: &'static [&'static str];

    /// Rules checked before an insert touches the database.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Bind one value per entry of `COLUMNS`, in order.
    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q>;
}

/// Drafts whose record may be updated in place.
pub trait Update: Insert {
    /// Rules checked before an update touches the database.
    fn validate_update(&self) -> Result<(), ValidationError>;
}

/// Generic data access for one entity
pub struct Repo<'a, T> {
    pool: &'a PgPool,
    _record: PhantomData<fn() -> T>,
}

impl<'a, T: Table> Repo<'a, T> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }

    /// All rows in the table's natural order. Empty table gives an empty vec.
    pub async fn list(&self) -> Result<Vec<T>, DbError> {
        let sql = select_all(T::TABLE);
        let rows = sqlx::query(&sql).fetch_all(self.pool).await?;
        let records = map_rows::<T>(&rows)?;

        tracing::debug!(resource = T::RESOURCE, count = records.len(), "Listed records");
        Ok(records)
    }

    /// The row with primary key `id`, or `None`.
    pub async fn find(&self, id: i32) -> Result<Option<T>, DbError> {
        let sql = select_by_key(T::TABLE, T::KEY);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        row.as_ref()
            .map(T::from_row)
            .transpose()
            .map_err(DbError::from)
    }

    /// Validate and insert `draft`, returning the generated key.
    pub async fn add<D>(&self, draft: &D) -> Result<i32, DbError>
    where
        D: Insert<Record = T>,
    {
        draft.validate()?;

        let sql = insert_statement(T::TABLE, T::KEY, D::COLUMNS);
        let row = draft.bind(sqlx::query(&sql)).fetch_one(self.pool).await?;
        let id: i32 = row.try_get(T::KEY)?;

        tracing::info!(resource = T::RESOURCE, id, "Record created");
        Ok(id)
    }

    /// Validate and write `draft` over the row with key `id`, then return
    /// the row as stored.
    pub async fn update<D>(&self, id: i32, draft: &D) -> Result<T, DbError>
    where
        D: Update<Record = T>,
    {
        draft.validate_update()?;

        let sql = update_statement(T::TABLE, T::KEY, D::COLUMNS);
        let result = draft
            .bind(sqlx::query(&sql))
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::warn!(resource = T::RESOURCE, id, "Update matched no rows");
            return Err(DbError::not_found::<T>(id));
        }

        tracing::info!(resource = T::RESOURCE, id, "Record updated");

        // Deleted between the write and the read
        self.find(id)
            .await?
            .ok_or_else(|| DbError::not_found::<T>(id))
    }

    /// Number of rows in the table.
    pub async fn count(&self) -> Result<i64, DbError> {
        let sql = format!("SELECT COUNT(*) FROM {}", T::TABLE);
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(self.pool).await?;
        Ok(count)
    }
}

impl<'a, T: Removable> Repo<'a, T> {
    /// Delete the row with key `id`.
    ///
    /// A single statement; zero rows affected means the row was already gone.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let sql = delete_statement(T::TABLE, T::KEY);
        let result = sqlx::query(&sql).bind(id).execute(self.pool).await?;

        if result.rows_affected() == 0 {
            tracing::warn!(resource = T::RESOURCE, id, "Delete matched no rows");
            return Err(DbError::not_found::<T>(id));
        }

        tracing::info!(resource = T::RESOURCE, id, "Record deleted");
        Ok(())
    }
}

/// Map every row by column name. One bad value fails the whole batch.
fn map_rows<T: Table>(rows: &[PgRow]) -> Result<Vec<T>, sqlx::Error> {
    rows.iter().map(T::from_row).collect()
}

fn select_all(table: &str) -> String {
    format!("SELECT * FROM {}", table)
}

fn select_by_key(table: &str, key: &str) -> String {
    format!("SELECT * FROM {} WHERE {} = $1", table, key)
}

fn insert_statement(table: &str, key: &str, columns: &[&str]) -> String {
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("${}", i)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        table,
        columns.join(", "),
        placeholders.join(", "),
        key
    )
}

fn update_statement(table: &str, key: &str, columns: &[&str]) -> String {
    let assignments: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{} = ${}", col, i + 1))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE {} = ${}",
        table,
        assignments.join(", "),
        key,
        columns.len() + 1
    )
}

fn delete_statement(table: &str, key: &str) -> String {
    format!("DELETE FROM {} WHERE {} = $1", table, key)
}
