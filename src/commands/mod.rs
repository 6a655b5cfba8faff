//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod demo;
pub mod input;
pub mod models;
pub mod ops;
pub mod utils;

// Re-export main command functions
pub use demo::execute_demo;
pub use input::{parse_mapping, parse_object};
pub use models::{validate_args, PickArgs, SortJsonArgs};
pub use ops::{
    execute_keys, execute_max, execute_merge, execute_pick, execute_shorten, execute_sort_json,
    execute_sort_map, execute_sort_strings, execute_values,
};
pub use utils::display_version;
