//! Operations over associative containers.
//!
//! This module provides:
//! - Key shortening for maps and records
//! - Numeric maximum extraction
//! - Key/value enumeration, merging and filtered lookup
//! - Duplicate-preserving string sort and key-ordered maps

pub mod enumerate;
pub mod keys;
pub mod numeric;
pub mod sort;

// Re-export main functions
pub use enumerate::{all_keys, all_values, combine_maps, values_by_key};
pub use keys::shorten_keys;
pub use numeric::max_value;
pub use sort::{sort_map_by_key, sort_preserve_duplicates};
