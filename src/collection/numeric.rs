//! Numeric extremum over map values.

use crate::utils::error::CollectionError;
use crate::value::ValueMap;
use log::debug;

/// Return the largest numeric value in the map as `f64`
///
/// **Public** - main entry point for numeric extraction
///
/// Null values are skipped. Integers and floats compare by magnitude and
/// ties keep the first value seen. Iteration follows the map's native
/// order, so which of several equal maxima is seen first is unspecified.
///
/// # Returns
/// `Ok(None)` when the map is empty or holds only nulls
///
/// # Errors
/// * `CollectionError::NonNumericValue` - any non-null value that is not a
///   number, even one seen after the maximum
pub fn max_value(map: &ValueMap) -> Result<Option<f64>, CollectionError> {
    let mut max: Option<f64> = None;

    for (key, value) in map {
        if value.is_null() {
            continue;
        }

        let current = value.as_f64().ok_or_else(|| CollectionError::NonNumericValue {
            key: key.clone(),
            kind: value.kind(),
        })?;

        if max.map_or(true, |m| current > m) {
            max = Some(current);
        }
    }

    debug!("Maximum over {} entries: {:?}", map.len(), max);

    Ok(max)
}
