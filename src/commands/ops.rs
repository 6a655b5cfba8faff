//! Single-operation commands.
//!
//! Each command parses its arguments, runs one collection operation and
//! writes the result as JSON to the given writer.

use super::input::{parse_mapping, parse_object};
use super::models::{validate_args, PickArgs, SortJsonArgs};
use crate::collection::{
    all_keys, all_values, combine_maps, max_value, shorten_keys, sort_map_by_key,
    sort_preserve_duplicates, values_by_key,
};
use crate::output::{map_to_json, pairs_to_json, read_text, values_to_json, write_json};
use crate::pairs::sort_json_keys_with;
use crate::value::{Value, ValueMap};
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::io::Write;

/// Rename keys of an object according to a mapping object
pub fn execute_shorten(out: &mut dyn Write, input: &str, mapping: &str) -> Result<()> {
    let map = parse_object(input)?;
    let mapping = parse_mapping(mapping)?;

    let shortened = shorten_keys(&Value::Map(map), &mapping).context("Key shortening failed")?;

    write_json(out, &map_to_json(&shortened))?;
    Ok(())
}

/// Print the largest numeric value, or `null`
pub fn execute_max(out: &mut dyn Write, input: &str) -> Result<()> {
    let map = parse_object(input)?;
    let max = max_value(&map).context("Maximum extraction failed")?;

    write_json(out, &max)?;
    Ok(())
}

/// Print the sorted keys
pub fn execute_keys(out: &mut dyn Write, input: &str) -> Result<()> {
    let map = parse_object(input)?;
    write_json(out, &all_keys(&map))?;
    Ok(())
}

/// Print the values
pub fn execute_values(out: &mut dyn Write, input: &str) -> Result<()> {
    let map = parse_object(input)?;
    write_json(out, &values_to_json(all_values(&map)))?;
    Ok(())
}

/// Merge objects left to right
pub fn execute_merge(out: &mut dyn Write, inputs: &[String]) -> Result<()> {
    let maps = inputs
        .iter()
        .enumerate()
        .map(|(i, text)| parse_object(text).with_context(|| format!("Object #{} is invalid", i + 1)))
        .collect::<Result<Vec<ValueMap>>>()?;

    info!("Merging {} objects", maps.len());

    write_json(out, &map_to_json(&combine_maps(&maps)))?;
    Ok(())
}

/// Print the values of the requested keys
pub fn execute_pick(out: &mut dyn Write, args: &PickArgs) -> Result<()> {
    let map = parse_object(&args.input)?;
    let values = values_by_key(&map, &args.keys);

    debug!("Found {} of {} requested keys", values.len(), args.keys.len());

    write_json(out, &values_to_json(values))?;
    Ok(())
}

/// Print strings sorted with duplicates kept
pub fn execute_sort_strings(out: &mut dyn Write, items: Vec<String>) -> Result<()> {
    write_json(out, &sort_preserve_duplicates(items))?;
    Ok(())
}

/// Print an object with its keys in ascending order
pub fn execute_sort_map(out: &mut dyn Write, input: &str) -> Result<()> {
    let map = parse_object(input)?;
    let sorted = sort_map_by_key(Some(&map)).context("Map sort failed")?;

    write_json(out, &map_to_json(&sorted))?;
    Ok(())
}

/// Extract duplicate-key pairs and print them sorted by key
pub fn execute_sort_json(out: &mut dyn Write, args: &SortJsonArgs) -> Result<()> {
    validate_args(args)?;

    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => read_text(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => bail!("No input given"),
    };

    info!("Sorting JSON keys ({:?} mode)", args.mode);

    let pairs = sort_json_keys_with(&text, args.mode).context("Sorting JSON keys failed")?;

    write_json(out, &pairs_to_json(&pairs)?)?;
    Ok(())
}
