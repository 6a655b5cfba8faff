//! Duplicate-key JSON pair extraction.
//!
//! This module handles:
//! - Scanning text for `"key":digits` occurrences
//! - Keeping repeated keys as separate entries
//! - Stable ordering by key
//! - Optional strict validation of the surrounding JSON

pub mod extract;
pub mod scanner;
pub mod schema;

// Re-export main types
pub use extract::{extract_pairs, sort_json_keys, sort_json_keys_with};
pub use scanner::PairScanner;
pub use schema::{KeyValue, ScanMode};
