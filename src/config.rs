//! Pipeline configuration.
//!
//! Paths and column names are resolved once, up front, and passed into the
//! stages explicitly; the transform never reads the process environment.
//! Precedence: CLI flag > environment variable > built-in default.
//!
//! Environment variables (a `.env` file is honored, loaded in `main`):
//!
//! - `CSVETL_INPUT` / `CSVETL_OUTPUT` - input/output file paths
//! - `CSVETL_GROUP_BY` - categorical grouping column
//! - `CSVETL_MEASURE` - numeric measure column
//! - `CSVETL_RENAME_TO` - output name for the measure column

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default relative location of the input dataset.
pub const DEFAULT_INPUT: &str = "data/AmesHousing.csv";
/// Default relative location of the transformed output.
pub const DEFAULT_OUTPUT: &str = "data/AmesHousing_transformed.csv";
/// Default grouping column.
pub const DEFAULT_GROUP_BY: &str = "MS Zoning";
/// Default measure column.
pub const DEFAULT_MEASURE: &str = "SalePrice";
/// Default output name for the measure column.
pub const DEFAULT_RENAME_TO: &str = "Final_Sale_Price";

/// Resolved configuration for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Input CSV path.
    pub input: PathBuf,
    /// Output CSV path, overwritten if present.
    pub output: PathBuf,
    /// Categorical column whose distinct values define the groups.
    pub group_by: String,
    /// Numeric measure column to impute and aggregate.
    pub measure: String,
    /// Name the measure carries in the output.
    pub renamed_measure: String,
}

/// Unresolved CLI-level overrides, all optional.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub group_by: Option<String>,
    pub measure: Option<String>,
    pub rename_to: Option<String>,
}

impl PipelineConfig {
    /// Resolve a configuration against a base directory, the environment
    /// and explicit overrides.
    ///
    /// Relative paths (defaults or env values) are joined onto `base_dir`;
    /// explicit override paths are used as given.
    pub fn resolve(base_dir: &Path, overrides: ConfigOverrides) -> Self {
        let input = overrides
            .input
            .unwrap_or_else(|| base_dir.join(env_or("CSVETL_INPUT", DEFAULT_INPUT)));
        let output = overrides
            .output
            .unwrap_or_else(|| base_dir.join(env_or("CSVETL_OUTPUT", DEFAULT_OUTPUT)));

        Self {
            input,
            output,
            group_by: overrides
                .group_by
                .unwrap_or_else(|| env_or("CSVETL_GROUP_BY", DEFAULT_GROUP_BY)),
            measure: overrides
                .measure
                .unwrap_or_else(|| env_or("CSVETL_MEASURE", DEFAULT_MEASURE)),
            renamed_measure: overrides
                .rename_to
                .unwrap_or_else(|| env_or("CSVETL_RENAME_TO", DEFAULT_RENAME_TO)),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
