//! Ordered views: duplicate-preserving string sort and key-ordered maps.

use crate::utils::error::CollectionError;
use crate::value::{SortedMap, Value};
use log::debug;

/// Sort strings ascending, keeping every duplicate
///
/// **Public** - the input vector is sorted in place and handed back
pub fn sort_preserve_duplicates(mut items: Vec<String>) -> Vec<String> {
    // `sort` is stable
    items.sort();
    items
}

/// Copy a map into a container that iterates in ascending key order
///
/// **Public** - accepts any `(&String, &Value)` source, including the
/// output of a previous call
///
/// # Arguments
/// * `input` - `None` stands for an absent map; `Some` of an empty map is valid
///
/// # Errors
/// * `CollectionError::NilInput` - `input` is `None`
pub fn sort_map_by_key<'a, I>(input: Option<I>) -> Result<SortedMap, CollectionError>
where
    I: IntoIterator<Item = (&'a String, &'a Value)>,
{
    let entries = input.ok_or(CollectionError::NilInput)?;

    let sorted: SortedMap = entries
        .into_iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    debug!("Sorted map with {} keys", sorted.len());

    Ok(sorted)
}
