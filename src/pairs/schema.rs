//! Output shape of duplicate-key extraction.

use serde::{Deserialize, Serialize};

/// One `"key":digits` occurrence
///
/// The value is kept as the literal digit text. Several entries may share
/// the same key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// How strictly `sort_json_keys_with` treats its input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Scan any text for pairs; never fails
    #[default]
    Lenient,
    /// Require a well-formed JSON object before scanning
    Strict,
}
