//! File store coordination across content and metadata repositories.
//!
//! # Responsibility
//! - Present one store/find/delete API over the two per-table repositories.
//! - Enforce the write ordering that keeps content the anchor record.
//!
//! # Invariants
//! - Whether a file exists is decided by the content table alone.
//! - `store` executes either two inserts or two updates, never a mixed pair.
//! - `find` fails loudly when metadata exists without content.

use crate::model::file::{FileId, StorableFile};
use crate::repo::content_repo::ContentRepository;
use crate::repo::metadata_repo::MetadataRepository;
use crate::repo::{RepoError, RepoResult};
use rusqlite::Connection;
use serde_json::Value;

/// Coordinator presenting a single file-level API over both tables.
///
/// Not transactional by itself: every operation runs on a caller-supplied
/// connection, and the caller's transaction is what makes the two table
/// writes atomic. This type contributes ordering and integrity checks only.
pub struct FileStore<C: ContentRepository, M: MetadataRepository> {
    content: C,
    metadata: M,
}

impl<C: ContentRepository, M: MetadataRepository> FileStore<C, M> {
    /// Creates a store over the provided repository implementations.
    pub fn new(content: C, metadata: M) -> Self {
        Self { content, metadata }
    }

    /// Stores a file, inserting or fully replacing both halves.
    ///
    /// The content table decides whether this is an insert or an update.
    /// Content is always written before metadata so a metadata row never
    /// references a missing content row, even transiently.
    pub fn store(
        &self,
        file_id: FileId,
        content: &[u8],
        metadata: &Value,
        conn: &Connection,
    ) -> RepoResult<()> {
        match self.content.find_by_file_id(file_id, conn)? {
            None => {
                self.content.insert(file_id, content, conn)?;
                self.metadata.insert(file_id, metadata, conn)
            }
            Some(_) => {
                self.content.update(file_id, content, conn)?;
                self.metadata.update(file_id, metadata, conn)
            }
        }
    }

    /// Finds a stored file by id.
    ///
    /// Returns `None` when no metadata row exists; a content row without
    /// metadata reads as "file does not exist". Metadata without content is
    /// a broken invariant and fails with [`RepoError::Consistency`].
    pub fn find(&self, file_id: FileId, conn: &Connection) -> RepoResult<Option<StorableFile>> {
        let metadata = match self.metadata.find_by_file_id(file_id, conn)? {
            None => return Ok(None),
            Some(metadata) => metadata,
        };

        match self.content.find_by_file_id(file_id, conn)? {
            Some(content) => Ok(Some(StorableFile {
                file_id,
                content,
                metadata,
            })),
            None => Err(RepoError::Consistency { file_id }),
        }
    }

    /// Deletes both halves of a stored file.
    ///
    /// Metadata is removed first so an interrupted delete leaves content as
    /// the anchor rather than an orphaned metadata row.
    pub fn delete(&self, file_id: FileId, conn: &Connection) -> RepoResult<()> {
        self.metadata.delete(file_id, conn)?;
        self.content.delete(file_id, conn)
    }
}
