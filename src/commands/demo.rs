//! Demo command implementation.
//!
//! Runs every operation on fixed sample inputs and prints labelled
//! results. The first failing operation aborts the run.

use crate::collection::{
    all_keys, all_values, combine_maps, max_value, shorten_keys, sort_map_by_key,
    sort_preserve_duplicates, values_by_key,
};
use crate::output::{map_to_json, pairs_to_json, render_pretty, values_to_json};
use crate::pairs::sort_json_keys;
use crate::utils::config::{
    DEMO_DUPLICATE_KEY_JSON, DEMO_KEY_MAPPING, DEMO_MERGE_LEFT, DEMO_MERGE_RIGHT,
    DEMO_NUMERIC_INPUT, DEMO_PICK_KEYS, DEMO_SHORTEN_INPUT, DEMO_SORT_INPUT,
};
use crate::value::{map_of, KeyMapping, Record, ToRecord, Value};
use anyhow::{Context, Result};
use log::info;
use std::io::Write;

/// Sample struct-shaped input for key shortening
struct Settings {
    key_one: i64,
    key_two: i64,
}

impl ToRecord for Settings {
    fn to_record(&self) -> Record {
        Record::new()
            .with_field("keyOne", self.key_one)
            .with_field("keyTwo", self.key_two)
    }
}

/// Execute the demo command
///
/// **Public** - main entry point called from main.rs
pub fn execute_demo(out: &mut dyn Write) -> Result<()> {
    info!("Running demo over sample inputs");

    let mapping: KeyMapping = DEMO_KEY_MAPPING
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect();

    let input = Value::Map(map_of(DEMO_SHORTEN_INPUT.iter().copied()));
    let shortened = shorten_keys(&input, &mapping).context("Error in key shortening")?;
    writeln!(out, "Shortened Map: {}", map_to_json(&shortened))?;

    let settings = Settings {
        key_one: 1,
        key_two: 2,
    };
    let shortened = shorten_keys(&Value::Record(settings.to_record()), &mapping)
        .context("Error in key shortening")?;
    writeln!(out, "Shortened Record: {}", map_to_json(&shortened))?;

    let numeric = map_of(DEMO_NUMERIC_INPUT.iter().copied());
    let max = max_value(&numeric).context("Error in maximum extraction")?;
    writeln!(out, "Max Value: {}", serde_json::json!(max))?;

    writeln!(out, "All Keys: {}", serde_json::json!(all_keys(&numeric)))?;
    writeln!(out, "All Values: {}", values_to_json(all_values(&numeric)))?;

    let left = map_of(DEMO_MERGE_LEFT.iter().copied());
    let right = map_of(DEMO_MERGE_RIGHT.iter().copied());
    let combined = combine_maps([&left, &right]);
    writeln!(out, "Combined Map: {}", map_to_json(&combined))?;

    let picked = values_by_key(&numeric, DEMO_PICK_KEYS);
    writeln!(out, "Values by Key: {}", values_to_json(picked))?;

    let items: Vec<String> = DEMO_SORT_INPUT.iter().map(|s| s.to_string()).collect();
    writeln!(
        out,
        "Sorted with Duplicates Preserved: {}",
        serde_json::json!(sort_preserve_duplicates(items))
    )?;

    let sorted = sort_map_by_key(Some(&combined)).context("Error sorting map by key")?;
    let order: Vec<&String> = sorted.keys().collect();
    writeln!(out, "Map Sorted by Key: {}", serde_json::json!(order))?;

    let pairs = sort_json_keys(DEMO_DUPLICATE_KEY_JSON).context("Error sorting JSON keys")?;
    writeln!(out, "Sorted JSON with duplicate keys:")?;
    writeln!(out, "{}", render_pretty(&pairs_to_json(&pairs)?)?)?;

    Ok(())
}
