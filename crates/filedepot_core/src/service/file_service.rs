//! File service facade owning the transaction boundary.
//!
//! # Responsibility
//! - Expose store/retrieve/delete entry points to callers.
//! - Wrap each file store call in exactly one transaction.
//!
//! # Invariants
//! - File ids are generated here (random v4), never derived from content.
//! - A failed call rolls back: the transaction is dropped uncommitted, so
//!   no partial write survives.

use crate::model::file::{FileId, FileReference};
use crate::repo::content_repo::{ContentRepository, SqliteContentRepository};
use crate::repo::file_store::FileStore;
use crate::repo::json::TextJsonCodec;
use crate::repo::metadata_repo::{MetadataRepository, SqliteMetadataRepository};
use crate::repo::RepoError;
use log::info;
use rusqlite::Connection;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type FileServiceResult<T> = Result<T, FileServiceError>;

/// Errors from facade-level file operations.
#[derive(Debug)]
pub enum FileServiceError {
    /// Transaction begin or commit failed on the caller's connection.
    Transaction(rusqlite::Error),
    /// Underlying store operation failed.
    Store(RepoError),
}

impl Display for FileServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transaction(err) => write!(f, "transaction control failed: {err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FileServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transaction(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for FileServiceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Transaction(value)
    }
}

impl From<RepoError> for FileServiceError {
    fn from(value: RepoError) -> Self {
        Self::Store(value)
    }
}

/// Caller-facing file service over a [`FileStore`].
pub struct FileService<C: ContentRepository, M: MetadataRepository> {
    file_store: FileStore<C, M>,
}

impl FileService<SqliteContentRepository, SqliteMetadataRepository<TextJsonCodec>> {
    /// Creates a service wired to the SQLite repositories with text JSON
    /// binding.
    pub fn with_sqlite_defaults() -> Self {
        Self::new(FileStore::new(
            SqliteContentRepository::new(),
            SqliteMetadataRepository::new(TextJsonCodec),
        ))
    }
}

impl<C: ContentRepository, M: MetadataRepository> FileService<C, M> {
    /// Creates a service over the provided file store.
    pub fn new(file_store: FileStore<C, M>) -> Self {
        Self { file_store }
    }

    /// Stores new file content with its metadata, returning the generated id.
    pub fn store(
        &self,
        conn: &mut Connection,
        content: &[u8],
        metadata: &Value,
    ) -> FileServiceResult<FileId> {
        let file_id = Uuid::new_v4();
        let tx = conn.transaction()?;
        self.file_store.store(file_id, content, metadata, &tx)?;
        tx.commit()?;

        info!(
            "event=file_store module=service status=ok file_id={file_id} content_bytes={}",
            content.len()
        );
        Ok(file_id)
    }

    /// Retrieves a stored file, or `None` when it does not exist.
    pub fn retrieve(
        &self,
        conn: &mut Connection,
        file_id: FileId,
    ) -> FileServiceResult<Option<FileReference>> {
        let tx = conn.transaction()?;
        let found = self.file_store.find(file_id, &tx)?;
        tx.commit()?;

        Ok(found.map(FileReference::from))
    }

    /// Deletes both halves of a stored file.
    pub fn delete(&self, conn: &mut Connection, file_id: FileId) -> FileServiceResult<()> {
        let tx = conn.transaction()?;
        self.file_store.delete(file_id, &tx)?;
        tx.commit()?;

        info!("event=file_delete module=service status=ok file_id={file_id}");
        Ok(())
    }
}
