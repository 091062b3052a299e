//! SQLite job store implementation.
//!
//! Implements `JobStore` from `taodivs_core::jobs` using tokio-rusqlite.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio_rusqlite::Connection;

use taodivs_core::jobs::{JobStatus, JobStore, JobStoreError, StakeJobRecord};

use super::error::map_tokio_rusqlite_error;
use super::schema;

type Result<T> = std::result::Result<T, JobStoreError>;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Converts a text column into a value via a fallible parser, surfacing
/// parse failures as conversion errors tied to the column index.
fn parse_column<T>(
    idx: usize,
    text: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> std::result::Result<T, rusqlite::Error> {
    parse(text).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            format!("invalid value: {text}").into(),
        )
    })
}

fn row_to_record(row: &rusqlite::Row<'_>) -> std::result::Result<StakeJobRecord, rusqlite::Error> {
    let status_str: String = row.get(1)?;
    let created_str: String = row.get(6)?;
    let updated_str: String = row.get(7)?;

    Ok(StakeJobRecord {
        job_id: row.get(0)?,
        status: parse_column(1, &status_str, JobStatus::parse)?,
        netuid: row.get(2)?,
        hotkey: row.get(3)?,
        stake_amount: row.get(4)?,
        error: row.get(5)?,
        created_at: parse_column(6, &created_str, parse_datetime)?,
        updated_at: parse_column(7, &updated_str, parse_datetime)?,
    })
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// SQLite-backed job store.
///
/// Provides async access to the `stake_jobs` table.
pub struct SqliteJobStore {
    conn: Connection,
}

impl SqliteJobStore {
    /// Creates a new store with a file-based database.
    ///
    /// The database file will be created if it doesn't exist. Schema tables
    /// are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| JobStoreError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new store with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| JobStoreError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| JobStoreError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl JobStore for SqliteJobStore {
    async fn insert(&self, record: &StakeJobRecord) -> Result<()> {
        let record = record.clone();
        let job_id = record.job_id.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_JOB,
                    rusqlite::params![
                        record.job_id,
                        record.status.as_str(),
                        record.netuid,
                        record.hotkey,
                        record.stake_amount,
                        record.error,
                        record.created_at.to_rfc3339(),
                        record.updated_at.to_rfc3339(),
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, &job_id))
    }

    async fn update(&self, record: &StakeJobRecord) -> Result<()> {
        let record = record.clone();
        let job_id = record.job_id.clone();

        let affected = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::UPDATE_JOB,
                    rusqlite::params![
                        record.job_id,
                        record.status.as_str(),
                        record.stake_amount,
                        record.error,
                        record.updated_at.to_rfc3339(),
                    ],
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, &job_id))?;

        if affected == 0 {
            return Err(JobStoreError::NotFound { job_id });
        }
        Ok(())
    }

    async fn get(&self, job_id: &str) -> Result<Option<StakeJobRecord>> {
        let id = job_id.to_string();
        let job_id = job_id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_JOB_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([&id], row_to_record) {
                    Ok(record) => Ok(Some(record)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, &job_id))
    }
}
