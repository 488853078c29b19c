//! Transform stage: the semantic core of the pipeline.
//!
//! - Impute: fill missing numeric cells with their column mean
//! - Rename: sale-price measure column gets its output name
//! - Aggregate: mean of the renamed measure per grouping-key value

pub mod aggregate;
pub mod impute;
pub mod pipeline;

pub use aggregate::group_mean;
pub use impute::{impute_numeric_means, ImputedColumn};
pub use pipeline::{run, PipelineOutcome, PipelineSummary};

use crate::config::PipelineConfig;
use crate::error::TransformResult;
use crate::table::Table;

/// Run the full transform over a table: impute, rename, aggregate.
///
/// Order matters: imputation runs first so the renamed column carries
/// imputed values, and the rename runs before aggregation since the
/// aggregation references the new name. Consumes the input table and
/// returns the grouped result along with imputation diagnostics.
pub fn transform_table(
    mut table: Table,
    config: &PipelineConfig,
) -> TransformResult<(Table, Vec<ImputedColumn>)> {
    let imputed = impute_numeric_means(&mut table);
    table.rename_column(&config.measure, &config.renamed_measure)?;
    let grouped = group_mean(&table, &config.group_by, &config.renamed_measure)?;
    Ok((grouped, imputed))
}
