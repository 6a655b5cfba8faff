//! objutils
//!
//! Helpers for string-keyed maps of dynamically-typed values:
//! key shortening, numeric maximum, key/value enumeration, merging,
//! filtered lookup, ordered views, and extraction of `"key":digits`
//! pairs from JSON text with repeated keys.
//!
//! This crate provides the core implementation for the
//! `objutils` CLI tool.
//!
//! ## Getting Started
//!
//! ```
//! use objutils::collection::{all_keys, max_value};
//! use objutils::value::map_of;
//!
//! let map = map_of([("b", 2), ("a", 1), ("c", 3)]);
//! assert_eq!(all_keys(&map), vec!["a", "b", "c"]);
//! assert_eq!(max_value(&map).unwrap(), Some(3.0));
//! ```
//!
//! From the command line:
//!
//! ```bash
//! objutils sort-json '{"b":1,"a":6,"a":2}'
//! objutils demo
//! ```

pub mod collection;
pub mod commands;
pub mod output;
pub mod pairs;
pub mod utils;
pub mod value;
