//! Configuration and constants for the CLI.

use crate::pairs::ScanMode;

/// Log filter used when `--verbose` is not given and `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log filter used with `--verbose`
pub const VERBOSE_LOG_LEVEL: &str = "debug";

/// Scan mode used by `sort-json` unless `--strict` is passed
pub const DEFAULT_SCAN_MODE: ScanMode = ScanMode::Lenient;

// Literals fed to the `demo` command
pub const DEMO_SHORTEN_INPUT: &[(&str, i64)] = &[("keyOne", 1), ("keyTwo", 2)];
pub const DEMO_KEY_MAPPING: &[(&str, &str)] = &[("keyOne", "key"), ("keyTwo", "keyT")];
pub const DEMO_NUMERIC_INPUT: &[(&str, i64)] = &[("a", 1), ("b", 2), ("c", 3)];
pub const DEMO_MERGE_LEFT: &[(&str, i64)] = &[("a", 1), ("b", 2)];
pub const DEMO_MERGE_RIGHT: &[(&str, i64)] = &[("b", 3), ("c", 4)];
pub const DEMO_PICK_KEYS: &[&str] = &["a", "c"];
pub const DEMO_SORT_INPUT: &[&str] = &["b", "c", "e", "d", "t", "a", "b", "t"];
pub const DEMO_DUPLICATE_KEY_JSON: &str = r#"{"b":1,"d":2,"d":4,"a":6,"c":5,"e":5,"a":2}"#;
