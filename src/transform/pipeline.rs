//! Pipeline orchestration: extract, transform, load.
//!
//! One linear pass, each stage owning its output until it hands the table
//! to the next stage. The only non-fatal condition is a missing input
//! file, which short-circuits the run without touching the output path.

use serde::Serialize;
use std::path::PathBuf;

use crate::config::PipelineConfig;
use crate::error::{ExtractError, PipelineResult};
use crate::extract::read_table;
use crate::load::write_table;
use crate::logs::{log_block, log_info, log_success, log_warning};
use crate::transform::{transform_table, ImputedColumn};

/// How a pipeline run ended.
#[derive(Debug)]
pub enum PipelineOutcome {
    /// All three stages ran; the output file was written.
    Completed(PipelineSummary),
    /// The input file does not exist. Reported, not raised: the remaining
    /// stages are skipped and no output file is created.
    InputMissing { path: PathBuf },
}

/// Summary of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineSummary {
    /// Rows read from the input file.
    pub rows_in: usize,
    /// Distinct groups in the output.
    pub groups_out: usize,
    /// Columns that had missing cells filled, with means and fill counts.
    pub imputed: Vec<ImputedColumnSummary>,
    /// Where the result was written.
    pub output: PathBuf,
}

/// Serializable view of one imputed column.
#[derive(Debug, Clone, Serialize)]
pub struct ImputedColumnSummary {
    pub column: String,
    pub mean: f64,
    pub filled: usize,
}

impl From<ImputedColumn> for ImputedColumnSummary {
    fn from(i: ImputedColumn) -> Self {
        Self {
            column: i.name,
            mean: i.mean,
            filled: i.filled,
        }
    }
}

/// Run the full pipeline described by `config`.
///
/// Returns `Ok(PipelineOutcome::InputMissing { .. })` when the input file
/// does not exist; every other failure (unreadable input, missing column,
/// unwritable output) is an `Err` the caller should treat as fatal.
pub fn run(config: &PipelineConfig) -> PipelineResult<PipelineOutcome> {
    log_info(format!("File path is: {}", config.input.display()));

    // Extract
    let extracted = match read_table(&config.input) {
        Ok(extracted) => extracted,
        Err(ExtractError::NotFound(path)) => {
            return Ok(PipelineOutcome::InputMissing { path });
        }
        Err(e) => return Err(e.into()),
    };
    let table = extracted.table;
    log_success(format!(
        "Data loaded successfully ({} rows, {} columns, encoding {}, delimiter '{}')",
        table.n_rows(),
        table.n_cols(),
        extracted.encoding,
        format_delimiter(extracted.delimiter),
    ));

    log_info("First 10 rows of the dataset:");
    log_block(&table.head(10));
    log_info("Last 10 rows of the dataset:");
    log_block(&table.tail(10));

    // Transform
    let rows_in = table.n_rows();
    let (grouped, imputed) = transform_table(table, config)?;

    if imputed.is_empty() {
        log_info("No missing numeric values to impute");
    } else {
        for col in &imputed {
            log_info(format!(
                "Imputed {} missing value(s) in '{}' with mean {}",
                col.filled, col.name, col.mean
            ));
        }
    }
    log_success(format!(
        "Aggregated '{}' by '{}': {} group(s)",
        config.renamed_measure,
        config.group_by,
        grouped.n_rows()
    ));
    log_block(&grouped.render());

    if grouped
        .column(&config.renamed_measure)
        .is_some_and(|c| c.missing_count() > 0)
    {
        log_warning("Some groups have no measure values; their mean is empty");
    }

    // Load
    write_table(&grouped, &config.output)?;
    log_success(format!(
        "Data successfully saved to {}",
        config.output.display()
    ));

    Ok(PipelineOutcome::Completed(PipelineSummary {
        rows_in,
        groups_out: grouped.n_rows(),
        imputed: imputed.into_iter().map(Into::into).collect(),
        output: config.output.clone(),
    }))
}

fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}
