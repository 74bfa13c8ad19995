//! Rendering of command results to the output stream.

use std::io::Write;

use georoute_core::Outcome;
use serde_json::Value;

use crate::CliError;

/// Write a dry-run description verbatim, or the rendered result as pretty
/// JSON.
pub(crate) fn write_outcome<T>(
    writer: &mut dyn Write,
    outcome: Outcome<T>,
    render: impl FnOnce(&T) -> Value,
) -> Result<(), CliError> {
    let payload = match outcome {
        Outcome::DryRun(description) => description,
        Outcome::Executed(result) => {
            serde_json::to_string_pretty(&render(&result)).map_err(CliError::SerialiseOutput)?
        }
    };
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
