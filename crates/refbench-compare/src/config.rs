//! Configuration for the comparator
//!
//! Controls how candidate sets are matched against the oracle and which
//! near-miss false positives are forgiven.

use crate::error::CompareError;
use serde::{Deserialize, Serialize};

/// Configuration for [`ResultComparator`](crate::ResultComparator)
///
/// # Examples
///
/// ```
/// use refbench_compare::ComparatorConfig;
///
/// // Default: only pull-ups into an extracted supertype are forgiven
/// let config = ComparatorConfig::default();
/// assert!(config.ignore_pull_up_to_extracted_supertype);
/// assert!(!config.ignore_move_to_moved_type);
///
/// // Strict: every mismatch counts
/// let config = ComparatorConfig::strict();
/// assert!(!config.ignore_pull_up_to_extracted_supertype);
///
/// // Lenient: coarse matching and every suppression on
/// let config = ComparatorConfig::lenient();
/// assert!(config.group_refactorings);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparatorConfig {
    /// Grade the coarsened view, one unit per (category, before entity)
    #[serde(default)]
    pub group_refactorings: bool,

    /// Strip parameter lists from every entity before matching
    #[serde(default)]
    pub ignore_method_params: bool,

    /// Forgive a pull-up whose classes match an expected extract superclass
    /// or extract interface
    #[serde(default = "default_true")]
    pub ignore_pull_up_to_extracted_supertype: bool,

    /// Forgive a member move whose classes match an expected class move
    #[serde(default)]
    pub ignore_move_to_moved_type: bool,

    /// Forgive a member move whose classes match an expected class rename
    #[serde(default)]
    pub ignore_move_to_renamed_type: bool,

    /// Decimal places for precision, recall and F1 in text reports
    /// Default: 3
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

fn default_true() -> bool {
    true
}

fn default_decimals() -> usize {
    3
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            group_refactorings: false,
            ignore_method_params: false,
            ignore_pull_up_to_extracted_supertype: true,
            ignore_move_to_moved_type: false,
            ignore_move_to_renamed_type: false,
            decimals: default_decimals(),
        }
    }
}

impl ComparatorConfig {
    /// Exact matching, no suppressions
    pub fn strict() -> Self {
        Self {
            ignore_pull_up_to_extracted_supertype: false,
            ..Self::default()
        }
    }

    /// Coarse matching with every suppression enabled
    pub fn lenient() -> Self {
        Self {
            group_refactorings: true,
            ignore_method_params: true,
            ignore_pull_up_to_extracted_supertype: true,
            ignore_move_to_moved_type: true,
            ignore_move_to_renamed_type: true,
            decimals: default_decimals(),
        }
    }

    /// Parse from TOML
    pub fn from_toml(s: &str) -> Result<Self, CompareError> {
        let config: Self = toml::from_str(s).map_err(|e| {
            CompareError::Config(format!("Failed to parse comparator config: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String, CompareError> {
        toml::to_string_pretty(self).map_err(|e| {
            CompareError::Config(format!("Failed to serialize comparator config: {}", e))
        })
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), CompareError> {
        if !(1..=9).contains(&self.decimals) {
            return Err(CompareError::Config(format!(
                "decimals must be between 1 and 9, got {}",
                self.decimals
            )));
        }
        Ok(())
    }
}
