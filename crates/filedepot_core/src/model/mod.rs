//! Domain model for stored files.
//!
//! # Responsibility
//! - Define the canonical data structures used by persistence and callers.
//! - Keep one aggregate shape pairing content bytes with their metadata.
//!
//! # Invariants
//! - Every stored file is identified by a stable random `FileId`.
//! - Partial aggregates (content without metadata or vice versa) are never
//!   exposed outside the store.

pub mod file;
