//! Normalize command implementation.

use crate::cli::NormalizeArgs;
use crate::error::Result;
use crate::output::Formatter;
use refbench_domain::signature;

/// Execute the normalize command.
pub fn execute_normalize(args: NormalizeArgs, formatter: &Formatter) -> Result<()> {
    let normalized: Vec<String> = args
        .signatures
        .iter()
        .map(|s| signature::normalize(s))
        .collect();
    println!("{}", formatter.format_signatures(&args.signatures, &normalized)?);
    Ok(())
}
