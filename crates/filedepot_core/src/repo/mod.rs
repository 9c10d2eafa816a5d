//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define table-scoped data access contracts over a caller-owned
//!   connection.
//! - Isolate SQL statement details from file store orchestration.
//!
//! # Invariants
//! - No repository operation begins, commits or rolls back a transaction;
//!   the connection handle and its transaction belong to the caller.
//! - Single-row writes must affect exactly one row; any other count is
//!   reported as an integrity violation, never silently accepted.

use crate::model::file::FileId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod content_repo;
pub mod file_store;
pub mod json;
pub mod metadata_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors raised by file persistence operations.
///
/// Absence of a row is not an error: finders return `Ok(None)` so that a
/// missing file stays distinguishable from a decoding failure.
#[derive(Debug)]
pub enum RepoError {
    /// The storage engine failed while executing a statement.
    Storage {
        statement: &'static str,
        source: rusqlite::Error,
    },
    /// A single-row write affected an unexpected number of rows.
    ///
    /// Points at a logic or concurrency bug (vanished row, key collision)
    /// rather than a transient driver fault.
    Integrity {
        statement: &'static str,
        file_id: FileId,
        rows: usize,
    },
    /// Metadata exists without its anchoring content row.
    ///
    /// Detected at read time; signals corruption outside the store's
    /// control, not a missing file.
    Consistency { file_id: FileId },
    /// Persisted metadata cannot be converted back into a document.
    InvalidData { file_id: FileId, message: String },
}

impl RepoError {
    pub(crate) fn storage(statement: &'static str, source: rusqlite::Error) -> Self {
        Self::Storage { statement, source }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage { statement, source } => {
                write!(f, "failed to execute `{statement}`: {source}")
            }
            Self::Integrity {
                statement,
                file_id,
                rows,
            } => write!(
                f,
                "`{statement}` affected {rows} rows for file id {file_id}, expected exactly 1"
            ),
            Self::Consistency { file_id } => write!(
                f,
                "No file content found for file id {file_id} but metadata exists for that id"
            ),
            Self::InvalidData { file_id, message } => {
                write!(f, "invalid persisted metadata for file id {file_id}: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage { source, .. } => Some(source),
            Self::Integrity { .. } | Self::Consistency { .. } | Self::InvalidData { .. } => None,
        }
    }
}

/// Checks the affected-row count of a single-row write.
pub(crate) fn ensure_single_row(
    statement: &'static str,
    file_id: FileId,
    rows: usize,
) -> RepoResult<()> {
    if rows == 1 {
        Ok(())
    } else {
        Err(RepoError::Integrity {
            statement,
            file_id,
            rows,
        })
    }
}
