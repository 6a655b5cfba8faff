//! JSON rendering of operation results.
//!
//! Results are printed as two-space indented JSON. Maps render with
//! sorted keys so output is stable across runs.

use crate::pairs::KeyValue;
use crate::utils::error::OutputError;
use crate::value::Value;
use log::debug;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Serialize any value to an indented JSON string
///
/// **Public** - main entry point for rendering
pub fn render_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, OutputError> {
    serde_json::to_string_pretty(value).map_err(OutputError::SerializationFailed)
}

/// Write any value as indented JSON followed by a newline
///
/// **Public** - used by commands to print results
///
/// # Errors
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::WriteFailed` - the writer failed
pub fn write_json<W, T>(writer: &mut W, value: &T) -> Result<(), OutputError>
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
{
    serde_json::to_writer_pretty(&mut *writer, value)
        .map_err(OutputError::SerializationFailed)?;
    writeln!(writer)?;
    Ok(())
}

/// JSON object for any map, including key-ordered ones
pub fn map_to_json<'a, I>(entries: I) -> serde_json::Value
where
    I: IntoIterator<Item = (&'a String, &'a Value)>,
{
    serde_json::Value::Object(
        entries
            .into_iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect(),
    )
}

/// JSON array for a list of values
pub fn values_to_json<'a, I>(values: I) -> serde_json::Value
where
    I: IntoIterator<Item = &'a Value>,
{
    serde_json::Value::Array(values.into_iter().map(Value::to_json).collect())
}

/// JSON array of `{"key": .., "value": ..}` objects
pub fn pairs_to_json(pairs: &[KeyValue]) -> Result<serde_json::Value, OutputError> {
    serde_json::to_value(pairs).map_err(OutputError::SerializationFailed)
}

/// Read a whole input file as UTF-8 text
///
/// **Public** - backs `sort-json --file`
///
/// # Errors
/// * `OutputError::InvalidPath` - path is empty or a directory
/// * `OutputError::WriteFailed` - read error (I/O errors share one variant)
pub fn read_text(input_path: impl AsRef<Path>) -> Result<String, OutputError> {
    let input_path = input_path.as_ref();

    if input_path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if input_path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            input_path.display()
        )));
    }

    debug!("Reading input from: {}", input_path.display());

    let text = fs::read_to_string(input_path)?;

    debug!("Read {} bytes", text.len());

    Ok(text)
}
