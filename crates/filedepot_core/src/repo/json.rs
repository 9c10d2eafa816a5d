//! JSON parameter binding for metadata persistence.
//!
//! # Responsibility
//! - Translate metadata documents to and from storage engine parameters.
//! - Keep engine-specific JSON column handling out of the repositories.
//!
//! # Invariants
//! - `decode(encode(doc))` preserves document structure.
//! - Decode failures are reported as errors, never as absent rows.

use rusqlite::types::Value as SqlValue;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type JsonCodecResult<T> = Result<T, JsonCodecError>;

/// Errors raised when a metadata document cannot cross the SQL boundary.
#[derive(Debug)]
pub enum JsonCodecError {
    Encode(String),
    Decode(String),
}

impl Display for JsonCodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(message) => write!(f, "failed to encode metadata document: {message}"),
            Self::Decode(message) => write!(f, "failed to decode stored metadata: {message}"),
        }
    }
}

impl Error for JsonCodecError {}

/// Binding strategy between metadata documents and SQL parameters.
///
/// Implementations vary with the storage engine's JSON column support; the
/// metadata repository depends only on this contract.
pub trait JsonCodec {
    /// Encodes a document into a bindable SQL parameter value.
    fn encode(&self, document: &Value) -> JsonCodecResult<SqlValue>;
    /// Decodes a raw stored column value back into a document.
    fn decode(&self, raw: &str) -> JsonCodecResult<Value>;
}

/// Stores metadata documents as compact JSON text.
///
/// Suitable for engines without a native JSON column type; SQLite reads the
/// value back as plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextJsonCodec;

impl JsonCodec for TextJsonCodec {
    fn encode(&self, document: &Value) -> JsonCodecResult<SqlValue> {
        let text = serde_json::to_string(document)
            .map_err(|err| JsonCodecError::Encode(err.to_string()))?;
        Ok(SqlValue::Text(text))
    }

    fn decode(&self, raw: &str) -> JsonCodecResult<Value> {
        serde_json::from_str(raw).map_err(|err| JsonCodecError::Decode(err.to_string()))
    }
}
