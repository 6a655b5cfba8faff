//! Key shortening for maps and records.
//!
//! Each key found in the mapping table is replaced by its mapped name;
//! keys without an entry pass through unchanged. Values are copied as-is.

use crate::utils::error::CollectionError;
use crate::value::{KeyMapping, Value, ValueMap};
use log::debug;

/// Rename the keys of a map or the fields of a record
///
/// **Public** - main entry point for key shortening
///
/// # Arguments
/// * `input` - A `Value::Map` or `Value::Record`
/// * `mapping` - Original name to replacement name
///
/// # Returns
/// A new map with renamed keys. The input is not modified.
///
/// # Errors
/// * `CollectionError::InvalidInputKind` - input is neither a map nor a record
pub fn shorten_keys(input: &Value, mapping: &KeyMapping) -> Result<ValueMap, CollectionError> {
    let entries: Box<dyn Iterator<Item = (&str, &Value)> + '_> = match input {
        Value::Map(map) => Box::new(map.iter().map(|(k, v)| (k.as_str(), v))),
        Value::Record(record) => Box::new(record.fields()),
        other => {
            return Err(CollectionError::InvalidInputKind {
                found: other.kind(),
            })
        }
    };

    let result: ValueMap = entries
        .map(|(key, value)| (rename(key, mapping), value.clone()))
        .collect();

    debug!("Shortened {} keys from {} input", result.len(), input.kind());

    Ok(result)
}

/// Mapped name for `key`, or `key` itself
fn rename(key: &str, mapping: &KeyMapping) -> String {
    mapping
        .get(key)
        .cloned()
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_falls_back_to_original() {
        let mapping: KeyMapping = [("long".to_string(), "l".to_string())].into_iter().collect();
        assert_eq!(rename("long", &mapping), "l");
        assert_eq!(rename("other", &mapping), "other");
    }
}
