//! Extraction and ordering of duplicate-key JSON pairs.
//!
//! A JSON object may repeat keys; a structural parser would keep only one
//! of them. These functions keep all of them as separate `KeyValue`
//! entries and then order them by key.

use super::scanner::PairScanner;
use super::schema::{KeyValue, ScanMode};
use crate::utils::error::CollectionError;
use log::{debug, warn};
use serde::de::IgnoredAny;

/// Every `"key":digits` pair in the text, in source order
///
/// **Public** - lenient; text without matches yields an empty vector
pub fn extract_pairs(text: &str) -> Vec<KeyValue> {
    PairScanner::new(text).collect()
}

/// Extract pairs and stable-sort them by key
///
/// **Public** - main entry point, lenient mode
///
/// Entries sharing a key keep their source order.
///
/// # Example
/// ```
/// use objutils::pairs::{sort_json_keys, KeyValue};
///
/// let pairs = sort_json_keys(r#"{"b":1,"a":6,"a":2}"#).unwrap();
/// assert_eq!(
///     pairs,
///     vec![KeyValue::new("a", "6"), KeyValue::new("a", "2"), KeyValue::new("b", "1")]
/// );
/// ```
pub fn sort_json_keys(text: &str) -> Result<Vec<KeyValue>, CollectionError> {
    sort_json_keys_with(text, ScanMode::Lenient)
}

/// Extract pairs and stable-sort them by key, with an explicit scan mode
///
/// **Public** - used by the `sort-json` command
///
/// # Errors
/// * `CollectionError::InvalidJson` - strict mode only, when the text is not
///   a well-formed JSON object
pub fn sort_json_keys_with(text: &str, mode: ScanMode) -> Result<Vec<KeyValue>, CollectionError> {
    if mode == ScanMode::Strict {
        validate_json_object(text)?;
    }

    let mut pairs = extract_pairs(text);

    if pairs.is_empty() {
        warn!("No \"key\":digits pairs found in {} bytes of input", text.len());
    }

    // `sort_by` is stable, so equal keys keep their source order
    pairs.sort_by(|a, b| a.key.cmp(&b.key));

    debug!("Extracted and sorted {} pairs", pairs.len());

    Ok(pairs)
}

/// Check that the text is one JSON document with an object at the top level
///
/// **Private** - values are skipped without building them, so repeated keys
/// are accepted
fn validate_json_object(text: &str) -> Result<(), CollectionError> {
    serde_json::from_str::<IgnoredAny>(text)
        .map_err(|e| CollectionError::InvalidJson(e.to_string()))?;

    if !text.trim_start().starts_with('{') {
        return Err(CollectionError::InvalidJson(
            "top-level value must be an object".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_accepts_duplicate_keys() {
        let pairs = sort_json_keys_with(r#"{"a":1, "a":2}"#, ScanMode::Strict).unwrap();
        assert_eq!(pairs, vec![KeyValue::new("a", "1"), KeyValue::new("a", "2")]);
    }

    #[test]
    fn test_strict_rejects_malformed() {
        let err = sort_json_keys_with(r#"{"a":1,"#, ScanMode::Strict).unwrap_err();
        assert!(matches!(err, CollectionError::InvalidJson(_)));
    }

    #[test]
    fn test_strict_rejects_non_object() {
        let err = sort_json_keys_with("[1, 2]", ScanMode::Strict).unwrap_err();
        assert!(matches!(err, CollectionError::InvalidJson(_)));
    }

    #[test]
    fn test_lenient_never_fails() {
        assert!(sort_json_keys("not json at all").unwrap().is_empty());
        assert_eq!(sort_json_keys(r#"{"a":1,"#).unwrap(), vec![KeyValue::new("a", "1")]);
    }
}
