//! Core persistence logic for the file depot.
//! This crate is the single source of truth for file storage invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::file::{FileId, FileReference, StorableFile};
pub use repo::content_repo::{ContentRepository, SqliteContentRepository};
pub use repo::file_store::FileStore;
pub use repo::json::{JsonCodec, JsonCodecError, JsonCodecResult, TextJsonCodec};
pub use repo::metadata_repo::{MetadataRepository, SqliteMetadataRepository};
pub use repo::{RepoError, RepoResult};
pub use service::file_service::{FileService, FileServiceError, FileServiceResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
