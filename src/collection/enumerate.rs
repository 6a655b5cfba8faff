//! Key/value enumeration, merging and filtered lookup.

use crate::value::{Value, ValueMap};
use log::debug;

/// Every key of the map, sorted ascending by byte order
///
/// **Public** - deterministic regardless of the map's native order
pub fn all_keys(map: &ValueMap) -> Vec<String> {
    let mut keys: Vec<String> = map.keys().cloned().collect();
    keys.sort();
    keys
}

/// Every value of the map
///
/// **Public** - callers should not depend on the order
///
/// Values are currently emitted in the order of [`all_keys`], so zipping
/// the two rebuilds the map.
pub fn all_values(map: &ValueMap) -> Vec<&Value> {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries.into_iter().map(|(_, v)| v).collect()
}

/// Merge maps in argument order; later maps win on key collisions
///
/// **Public** - inputs are left untouched
///
/// # Example
/// ```
/// use objutils::collection::combine_maps;
/// use objutils::value::{map_of, Value};
///
/// let left = map_of([("a", 1), ("b", 2)]);
/// let right = map_of([("b", 3), ("c", 4)]);
/// let merged = combine_maps([&left, &right]);
///
/// assert_eq!(merged["b"], Value::Int(3));
/// assert_eq!(merged.len(), 3);
/// ```
pub fn combine_maps<'a, I>(maps: I) -> ValueMap
where
    I: IntoIterator<Item = &'a ValueMap>,
{
    let mut result = ValueMap::new();
    let mut sources = 0usize;

    for map in maps {
        for (k, v) in map {
            result.insert(k.clone(), v.clone());
        }
        sources += 1;
    }

    debug!("Combined {} maps into {} keys", sources, result.len());

    result
}

/// Values for the requested keys, in request order
///
/// **Public** - keys missing from the map are skipped, not reported
pub fn values_by_key<'a, S>(map: &'a ValueMap, keys: &[S]) -> Vec<&'a Value>
where
    S: AsRef<str>,
{
    keys.iter().filter_map(|k| map.get(k.as_ref())).collect()
}
