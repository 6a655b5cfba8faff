use crate::pairs::ScanMode;
use crate::utils::config::DEFAULT_SCAN_MODE;
use anyhow::{bail, Result};
use std::path::PathBuf;

/// Arguments for the sort-json command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SortJsonArgs {
    /// Inline JSON text
    pub text: Option<String>,

    /// Path to a file holding the JSON text
    pub file: Option<PathBuf>,

    /// Lenient scan or strict validation first
    pub mode: ScanMode,
}

impl Default for SortJsonArgs {
    fn default() -> Self {
        Self {
            text: None,
            file: None,
            mode: DEFAULT_SCAN_MODE,
        }
    }
}

/// Validate sort-json arguments before doing any work
///
/// **Public** - exactly one input source must be given
pub fn validate_args(args: &SortJsonArgs) -> Result<()> {
    match (&args.text, &args.file) {
        (Some(_), Some(_)) => bail!("Pass either inline TEXT or --file, not both"),
        (None, None) => bail!("No input given: pass inline TEXT or --file"),
        (None, Some(path)) if path.as_os_str().is_empty() => bail!("--file path is empty"),
        _ => Ok(()),
    }
}

/// Arguments for the pick command
#[derive(Debug, Clone, Default)]
pub struct PickArgs {
    /// JSON object text
    pub input: String,

    /// Keys to look up, in output order
    pub keys: Vec<String>,
}
