//! Output rendering for operation results.
//!
//! Supports:
//! - Indented JSON for maps, value lists and key-value pairs
//! - Reading text inputs from files

pub mod json;

// Re-export main functions
pub use json::{map_to_json, pairs_to_json, read_text, render_pretty, values_to_json, write_json};
