//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `JobStoreError`.
//! Constraint violations become semantic variants.

use taodivs_core::jobs::JobStoreError;

/// Maps a rusqlite error with a known job id to a JobStoreError.
///
/// # Error Mapping
///
/// - `SQLITE_CONSTRAINT_PRIMARYKEY` / `SQLITE_CONSTRAINT_UNIQUE` → `AlreadyExists`
/// - `CannotOpen` → `ConnectionFailed`
/// - `QueryReturnedNoRows` → `NotFound`
/// - All other errors → `QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error, job_id: &str) -> JobStoreError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                || sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            JobStoreError::AlreadyExists {
                job_id: job_id.to_string(),
            }
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            JobStoreError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        rusqlite::Error::QueryReturnedNoRows => JobStoreError::NotFound {
            job_id: job_id.to_string(),
        },

        _ => JobStoreError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a JobStoreError.
///
/// Extracts the inner `rusqlite::Error` if present, otherwise maps to a
/// generic `QueryFailed` error.
pub fn map_tokio_rusqlite_error(err: tokio_rusqlite::Error, job_id: &str) -> JobStoreError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => map_rusqlite_error(rusqlite_err, job_id),
        tokio_rusqlite::Error::Close(_) => {
            JobStoreError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => JobStoreError::QueryFailed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ffi;

    #[test]
    fn test_primary_key_constraint_maps_to_already_exists() {
        let sqlite_err = rusqlite::ffi::Error {
            code: rusqlite::ErrorCode::ConstraintViolation,
            extended_code: ffi::SQLITE_CONSTRAINT_PRIMARYKEY,
        };
        let rusqlite_err = rusqlite::Error::SqliteFailure(sqlite_err, None);
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite_err);

        let result = map_tokio_rusqlite_error(err, "job1");

        assert!(matches!(result, JobStoreError::AlreadyExists { job_id } if job_id == "job1"));
    }

    #[test]
    fn test_no_rows_maps_to_not_found() {
        let rusqlite_err = rusqlite::Error::QueryReturnedNoRows;
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite_err);

        let result = map_tokio_rusqlite_error(err, "job1");

        assert!(matches!(result, JobStoreError::NotFound { job_id } if job_id == "job1"));
    }

    #[test]
    fn test_other_error_maps_to_query_failed() {
        let err = tokio_rusqlite::Error::Other(Box::new(std::io::Error::other("test error")));

        let result = map_tokio_rusqlite_error(err, "job1");

        assert!(matches!(result, JobStoreError::QueryFailed(_)));
    }
}
