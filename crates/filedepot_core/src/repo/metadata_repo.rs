//! Metadata repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide single-row CRUD over the JSON `metadata` table.
//! - Delegate document/parameter conversion to the injected codec.
//!
//! # Invariants
//! - A metadata row must never outlive its content row; the file store's
//!   write ordering maintains this, not the schema.
//! - Decode failures surface as `InvalidData`, never as absent rows.

use crate::model::file::FileId;
use crate::repo::json::JsonCodec;
use crate::repo::{ensure_single_row, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;

const INSERT_SQL: &str = "INSERT INTO metadata (metadata, file_id) VALUES (?1, ?2);";
const FIND_BY_FILE_ID_SQL: &str = "SELECT metadata FROM metadata WHERE file_id = ?1;";
const UPDATE_SQL: &str = "UPDATE metadata SET metadata = ?1 WHERE file_id = ?2;";
const DELETE_SQL: &str = "DELETE FROM metadata WHERE file_id = ?1;";

/// Repository interface for file metadata rows.
pub trait MetadataRepository {
    /// Inserts a new metadata row for `file_id`.
    fn insert(&self, file_id: FileId, metadata: &Value, conn: &Connection) -> RepoResult<()>;
    /// Finds the metadata document for `file_id`, or `None` when no row
    /// exists.
    fn find_by_file_id(&self, file_id: FileId, conn: &Connection) -> RepoResult<Option<Value>>;
    /// Replaces the metadata of an existing row.
    fn update(&self, file_id: FileId, metadata: &Value, conn: &Connection) -> RepoResult<()>;
    /// Removes the metadata row for `file_id`.
    fn delete(&self, file_id: FileId, conn: &Connection) -> RepoResult<()>;
}

/// SQLite-backed metadata repository with pluggable JSON binding.
pub struct SqliteMetadataRepository<J: JsonCodec> {
    codec: J,
}

impl<J: JsonCodec> SqliteMetadataRepository<J> {
    pub fn new(codec: J) -> Self {
        Self { codec }
    }

    fn encode(&self, file_id: FileId, metadata: &Value) -> RepoResult<rusqlite::types::Value> {
        self.codec
            .encode(metadata)
            .map_err(|err| RepoError::InvalidData {
                file_id,
                message: err.to_string(),
            })
    }
}

impl<J: JsonCodec> MetadataRepository for SqliteMetadataRepository<J> {
    fn insert(&self, file_id: FileId, metadata: &Value, conn: &Connection) -> RepoResult<()> {
        let parameter = self.encode(file_id, metadata)?;
        let rows = conn
            .execute(INSERT_SQL, params![parameter, file_id.to_string()])
            .map_err(|err| RepoError::storage(INSERT_SQL, err))?;
        ensure_single_row(INSERT_SQL, file_id, rows)
    }

    fn find_by_file_id(&self, file_id: FileId, conn: &Connection) -> RepoResult<Option<Value>> {
        let raw = conn
            .query_row(FIND_BY_FILE_ID_SQL, params![file_id.to_string()], |row| {
                row.get::<_, String>(0)
            })
            .optional()
            .map_err(|err| RepoError::storage(FIND_BY_FILE_ID_SQL, err))?;

        match raw {
            None => Ok(None),
            Some(text) => self
                .codec
                .decode(&text)
                .map(Some)
                .map_err(|err| RepoError::InvalidData {
                    file_id,
                    message: err.to_string(),
                }),
        }
    }

    fn update(&self, file_id: FileId, metadata: &Value, conn: &Connection) -> RepoResult<()> {
        let parameter = self.encode(file_id, metadata)?;
        let rows = conn
            .execute(UPDATE_SQL, params![parameter, file_id.to_string()])
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
