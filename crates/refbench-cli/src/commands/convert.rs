//! Convert command implementation.

use crate::cli::ConvertArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use refbench_readers::InputFormat;
use tracing::info;

/// Execute the convert command.
pub fn execute_convert(args: ConvertArgs, formatter: &Formatter) -> Result<()> {
    let format: InputFormat = args.input_format.parse().map_err(CliError::InvalidInput)?;
    let set = format
        .reader()
        .read_file(&args.project, &args.revision, &args.input)?;
    info!(format = %format, count = set.len(), "Converted");

    let output = formatter.format_set(&set)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
