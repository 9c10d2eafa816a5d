//! Content repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide single-row CRUD over the binary `content` table.
//! - Keep SQL statement shapes for file content in one place.
//!
//! # Invariants
//! - Every operation runs on a caller-supplied connection; any transaction
//!   is assumed to have been started on it by the caller.
//! - Insert, update and delete must affect exactly one row.

use crate::model::file::FileId;
use crate::repo::{ensure_single_row, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};

const INSERT_SQL: &str = "INSERT INTO content (content, file_id) VALUES (?1, ?2);";
const FIND_BY_FILE_ID_SQL: &str = "SELECT content FROM content WHERE file_id = ?1;";
const UPDATE_SQL: &str = "UPDATE content SET content = ?1 WHERE file_id = ?2;";
const DELETE_SQL: &str = "DELETE FROM content WHERE file_id = ?1;";

/// Repository interface for binary file content rows.
pub trait ContentRepository {
    /// Inserts a new content row for `file_id`.
    fn insert(&self, file_id: FileId, content: &[u8], conn: &Connection) -> RepoResult<()>;
    /// Finds the content bytes for `file_id`, or `None` when no row exists.
    fn find_by_file_id(&self, file_id: FileId, conn: &Connection) -> RepoResult<Option<Vec<u8>>>;
    /// Replaces the content of an existing row.
    fn update(&self, file_id: FileId, content: &[u8], conn: &Connection) -> RepoResult<()>;
    /// Removes the content row for `file_id`.
    fn delete(&self, file_id: FileId, conn: &Connection) -> RepoResult<()>;
}

/// SQLite-backed content repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteContentRepository;

impl SqliteContentRepository {
    pub fn new() -> Self {
        Self
    }
}

impl ContentRepository for SqliteContentRepository {
    fn insert(&self, file_id: FileId, content: &[u8], conn: &Connection) -> RepoResult<()> {
        let rows = conn
            .execute(INSERT_SQL, params![content, file_id.to_string()])
            .map_err(|err| RepoError::storage(INSERT_SQL, err))?;
        ensure_single_row(INSERT_SQL, file_id, rows)
    }

    fn find_by_file_id(&self, file_id: FileId, conn: &Connection) -> RepoResult<Option<Vec<u8>>> {
        conn.query_row(FIND_BY_FILE_ID_SQL, params![file_id.to_string()], |row| {
            row.get(0)
        })
        .optional()
        .map_err(|err| RepoError::storage(FIND_BY_FILE_ID_SQL, err))
    }

    fn update(&self, file_id: FileId, content: &[u8], conn: &Connection) -> RepoResult<()> {
        let rows = conn
            .execute(UPDATE_SQL, params![content, file_id.to_string()])
            .map_err(|err| RepoError::storage(UPDATE_SQL, err))?;
        ensure_single_row(UPDATE_SQL, file_id, rows)
    }

    fn delete(&self, file_id: FileId, conn: &Connection) -> RepoResult<()> {
        let rows = conn
            .execute(DELETE_SQL, params![file_id.to_string()])
            .map_err(|err| RepoError::storage(DELETE_SQL, err))?;
        ensure_single_row(DELETE_SQL, file_id, rows)
    }
}
