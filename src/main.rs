//! objutils CLI
//!
//! Runs the map helpers on JSON object arguments and prints
//! the results as JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::io::Write;
use std::path::PathBuf;

use objutils::commands::{
    display_version, execute_demo, execute_keys, execute_max, execute_merge, execute_pick,
    execute_shorten, execute_sort_json, execute_sort_map, execute_sort_strings, execute_values,
    PickArgs, SortJsonArgs,
};
use objutils::pairs::ScanMode;
use objutils::utils::config::{DEFAULT_LOG_LEVEL, DEFAULT_SCAN_MODE, VERBOSE_LOG_LEVEL};

/// objutils - map and collection helpers
#[derive(Parser, Debug)]
#[command(name = "objutils")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run every operation on built-in sample inputs
    Demo,

    /// Rename object keys using a mapping object
    Shorten {
        /// JSON object to rename
        input: String,

        /// JSON object of original name -> short name
        #[arg(short, long)]
        mapping: String,
    },

    /// Print the largest numeric value of an object
    Max {
        /// JSON object with numeric or null values
        input: String,
    },

    /// Print the keys of an object, sorted
    Keys {
        /// JSON object
        input: String,
    },

    /// Print the values of an object
    Values {
        /// JSON object
        input: String,
    },

    /// Merge objects; later objects win on shared keys
    Merge {
        /// JSON objects, merged left to right
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Print the values of selected keys, skipping missing ones
    Pick {
        /// JSON object
        input: String,

        /// Comma-separated keys, in output order
        #[arg(short, long, value_delimiter = ',')]
        keys: Vec<String>,
    },

    /// Sort strings, keeping duplicates
    SortStrings {
        /// Strings to sort
        items: Vec<String>,
    },

    /// Print an object with keys in ascending order
    SortMap {
        /// JSON object
        input: String,
    },

    /// Extract "key":digits pairs, keeping repeated keys, sorted by key
    SortJson {
        /// Inline JSON text
        text: Option<String>,

        /// Read the JSON text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Require well-formed JSON before scanning
        #[arg(long)]
        strict: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Execute command
    match cli.command {
        Commands::Demo => execute_demo(&mut out)?,
        Commands::Shorten { input, mapping } => execute_shorten(&mut out, &input, &mapping)?,
        Commands::Max { input } => execute_max(&mut out, &input)?,
        Commands::Keys { input } => execute_keys(&mut out, &input)?,
        Commands::Values { input } => execute_values(&mut out, &input)?,
        Commands::Merge { inputs } => execute_merge(&mut out, &inputs)?,
        Commands::Pick { input, keys } => execute_pick(&mut out, &PickArgs { input, keys })?,
        Commands::SortStrings { items } => execute_sort_strings(&mut out, items)?,
        Commands::SortMap { input } => execute_sort_map(&mut out, &input)?,
        Commands::SortJson { text, file, strict } => {
            let args = SortJsonArgs {
                text,
                file,
                mode: if strict {
                    ScanMode::Strict
                } else {
                    DEFAULT_SCAN_MODE
                },
            };
            execute_sort_json(&mut out, &args)?;
        }
        Commands::Version => display_version(&mut out)?,
    }

    out.flush()?;

    Ok(())
}
