//! File aggregate domain model.
//!
//! # Responsibility
//! - Define the in-memory shape of a stored file and its retrieval view.
//! - Make identifier semantics explicit in persistence signatures.
//!
//! # Invariants
//! - `FileId` values are random (UUID v4), never derived from file content.
//! - Content is the anchor record: metadata only exists alongside it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::Cursor;
use uuid::Uuid;

/// Stable identifier correlating a content row and a metadata row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type FileId = Uuid;

/// In-memory aggregate of one stored file.
///
/// This is the unit the file store reads and writes atomically from the
/// caller's perspective; it is never persisted as a single row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorableFile {
    /// Stable global ID used for addressing both halves of the file.
    pub file_id: FileId,
    /// Raw file content bytes.
    pub content: Vec<u8>,
    /// Structured metadata document describing the content.
    pub metadata: Value,
}

impl StorableFile {
    /// Creates an aggregate with a generated stable ID.
    pub fn new(content: Vec<u8>, metadata: Value) -> Self {
        Self::with_id(Uuid::new_v4(), content, metadata)
    }

    /// Creates an aggregate with a caller-provided stable ID.
    ///
    /// Used when identity already exists externally (re-store paths).
    pub fn with_id(file_id: FileId, content: Vec<u8>, metadata: Value) -> Self {
        Self {
            file_id,
            content,
            metadata,
        }
    }
}

/// Read-side view of a stored file returned by retrieval.
///
/// Exposes the metadata document and a re-readable reader over the content
/// bytes; every `content_reader()` call starts at the beginning again.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReference {
    file_id: FileId,
    metadata: Value,
    content: Vec<u8>,
}

impl FileReference {
    /// Stable id this reference was retrieved under.
    pub fn file_id(&self) -> FileId {
        self.file_id
    }

    /// The stored metadata document.
    pub fn metadata(&self) -> &Value {
        &self.metadata
    }

    /// The stored content bytes.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Returns a fresh reader over the content bytes.
    pub fn content_reader(&self) -> Cursor<&[u8]> {
        Cursor::new(self.content.as_slice())
    }
}

impl From<StorableFile> for FileReference {
    fn from(file: StorableFile) -> Self {
        Self {
            file_id: file.file_id,
            metadata: file.metadata,
            content: file.content,
        }
    }
}
