//! Parsing of JSON object arguments.

use crate::value::{object_to_map, KeyMapping, Value, ValueMap};
use anyhow::{bail, Context, Result};
use log::debug;

/// Parse a JSON object text into a [`ValueMap`]
///
/// **Public** - every `<OBJECT>` argument goes through here
pub fn parse_object(text: &str) -> Result<ValueMap> {
    let json: serde_json::Value =
        serde_json::from_str(text).with_context(|| format!("Invalid JSON argument: {}", text))?;

    match json {
        serde_json::Value::Object(obj) => {
            debug!("Parsed object argument with {} keys", obj.len());
            Ok(object_to_map(obj))
        }
        other => bail!(
            "Expected a JSON object, found {}",
            Value::from(other).kind()
        ),
    }
}

/// Parse a JSON object of string values into a [`KeyMapping`]
///
/// **Public** - backs `shorten --mapping`
pub fn parse_mapping(text: &str) -> Result<KeyMapping> {
    parse_object(text)?
        .into_iter()
        .map(|(from, to)| match to {
            Value::Str(name) => Ok((from, name)),
            other => bail!(
                "Mapping for '{}' must be a string, found {}",
                from,
                other.kind()
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_rejects_array() {
        let err = parse_object("[1,2]").unwrap_err();
        assert!(err.to_string().contains("list"));
    }

    #[test]
    fn test_parse_object_rejects_garbage() {
        assert!(parse_object("{oops").is_err());
    }

    #[test]
    fn test_parse_mapping_requires_strings() {
        assert!(parse_mapping(r#"{"a":"b"}"#).is_ok());
        assert!(parse_mapping(r#"{"a":1}"#).is_err());
    }
}
