// crates/cli/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod input;
pub mod options;
pub mod parsers;
pub mod presentation;

use crate::config::CliConfig;
use invalid_ids_shared_kernel::{ErrorContext, InvalidIdsError, Result};
use std::io::Write;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Read the input, count it and write the report to `out`.
///
/// # Errors
/// Returns an error if the input cannot be read, the engine rejects it, or
/// the report cannot be written.
pub fn execute<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    let text = config.input.read()?;
    let result = invalid_ids_engine::run(&text, &config.engine)
        .with_context(|| format!("processing {}", config.input))?;
    presentation::write_results(&result, &config.engine, out)?;
    out.flush()
        .map_err(|source| InvalidIdsError::OutputWrite { source })
}
