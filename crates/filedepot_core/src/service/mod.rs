//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate file store calls into caller-facing entry points.
//! - Own the transaction boundary the repository layer deliberately lacks.

pub mod file_service;
