//! # csvetl - batch CSV cleaning and aggregation
//!
//! csvetl reads a delimited tabular file, fills missing numeric values
//! with their column means, renames the sale-price measure column, and
//! writes the mean of that measure per grouping-key value to a new CSV.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Extract   │────▶│    Transform     │────▶│   CSV File  │
//! │ (auto-enc)  │     │  (in-mem)   │     │ impute+agg mean  │     │ (no index)  │
//! └─────────────┘     └─────────────┘     └──────────────────┘     └─────────────┘
//! ```
//!
//! One linear pass, single-threaded, whole table in memory. Each stage
//! owns its output until it hands it to the next.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use csvetl::{run, ConfigOverrides, PipelineConfig};
//!
//! let config = PipelineConfig::resolve(
//!     std::path::Path::new("."),
//!     ConfigOverrides::default(),
//! );
//! match run(&config)? {
//!     csvetl::PipelineOutcome::Completed(summary) => {
//!         println!("{} groups written", summary.groups_out)
//!     }
//!     csvetl::PipelineOutcome::InputMissing { path } => {
//!         eprintln!("no input at {}", path.display())
//!     }
//! }
//! # Ok::<(), csvetl::PipelineError>(())
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Per-stage error types
//! - [`config`] - Path and column configuration
//! - [`table`] - In-memory table model
//! - [`extract`] - CSV reading with auto-detection
//! - [`transform`] - Imputation, rename, aggregation, orchestration
//! - [`load`] - CSV writing
//! - [`logs`] - Diagnostic output helpers

// Core modules
pub mod config;
pub mod error;
pub mod table;

// Stages
pub mod extract;
pub mod load;
pub mod transform;

// Diagnostics
pub mod logs;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ExtractError, LoadError, PipelineError, TransformError};

// =============================================================================
// Re-exports - Model
// =============================================================================

pub use table::{Cell, Column, ColumnKind, Table};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{ConfigOverrides, PipelineConfig};

// =============================================================================
// Re-exports - Stages
// =============================================================================

pub use extract::{read_table, read_table_with_delimiter, Extracted};
pub use load::write_table;
pub use transform::{
    group_mean, impute_numeric_means, run, transform_table, ImputedColumn, PipelineOutcome,
    PipelineSummary,
};
