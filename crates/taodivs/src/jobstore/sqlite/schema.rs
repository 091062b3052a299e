//! SQL statements for the stake job store.
//!
//! Timestamps are stored as RFC 3339 strings; `stake_amount` and `error`
//! are nullable because a pending record has neither.

pub const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS stake_jobs (
    job_id       TEXT PRIMARY KEY,
    status       TEXT NOT NULL,
    netuid       INTEGER NOT NULL,
    hotkey       TEXT NOT NULL,
    stake_amount REAL,
    error        TEXT,
    created_at   TEXT NOT NULL,
    updated_at   TEXT NOT NULL
);
";

pub const INSERT_JOB: &str = "
INSERT INTO stake_jobs (job_id, status, netuid, hotkey, stake_amount, error, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
";

pub const UPDATE_JOB: &str = "
UPDATE stake_jobs
SET status = ?2, stake_amount = ?3, error = ?4, updated_at = ?5
WHERE job_id = ?1
";

pub const SELECT_JOB_BY_ID: &str = "
SELECT job_id, status, netuid, hotkey, stake_amount, error, created_at, updated_at
FROM stake_jobs
WHERE job_id = ?1
";
