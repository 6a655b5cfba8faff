//! Dynamic values and the container aliases built on them.
//!
//! This module defines:
//! - `Value`, the tagged union carried by every map
//! - `Record` and `ToRecord` for struct-shaped inputs
//! - Conversions to and from `serde_json::Value`

pub mod convert;
pub mod types;

// Re-export main types
pub use convert::object_to_map;
pub use types::{map_of, KeyMapping, Record, SortedMap, ToRecord, Value, ValueMap};
