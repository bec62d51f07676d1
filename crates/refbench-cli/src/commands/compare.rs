//! Compare command implementation.

use crate::cli::CompareArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::manifest::Manifest;
use crate::output::Formatter;
use refbench_domain::{CategorySet, RefactoringCategory};
use tracing::info;

/// Execute the compare command.
pub fn execute_compare(args: CompareArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let categories = parse_categories(&args.categories)?;
    let manifest = Manifest::load(&args.manifest)?;
    let comparator_config = manifest.comparator_config(&config.comparator);

    info!(
        manifest = %args.manifest.display(),
        revisions = manifest.revisions.len(),
        categories = categories.len(),
        "Grading"
    );
    let comparator = manifest.build(comparator_config, config)?;

    println!("{}", formatter.format_summary(&comparator, &categories)?);
    if args.details {
        comparator.print_details(&mut std::io::stdout().lock(), &categories)?;
    }

    Ok(())
}

/// Resolve abbreviations (or display names) to categories; none means all.
pub fn parse_categories(names: &[String]) -> Result<CategorySet> {
    if names.is_empty() {
        return Ok(RefactoringCategory::all());
    }

    let mut categories = CategorySet::new();
    for name in names.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
        let matched = RefactoringCategory::from_abbreviation(name);
        if matched.is_empty() {
            let category = RefactoringCategory::from_name(name)
                .map_err(|_| CliError::InvalidInput(format!("Unknown category: {}", name)))?;
            categories.insert(category);
        } else {
            categories.extend(matched);
        }
    }
    Ok(categories)
}
