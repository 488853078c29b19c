//! Error types for the csvetl pipeline.
//!
//! One error enum per stage, plus a top-level orchestration error:
//!
//! - [`ExtractError`] - reading and parsing the input file
//! - [`TransformError`] - imputation, rename and aggregation
//! - [`LoadError`] - writing the output file
//! - [`PipelineError`] - top-level wrapper
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across stage boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Extraction Errors
// =============================================================================

/// Errors while reading the input file into a table.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Input path does not resolve to a readable file.
    ///
    /// This is the one non-fatal condition in the pipeline: the caller
    /// reports it and skips the remaining stages.
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Any other I/O failure while reading.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to decode file bytes.
    #[error("Failed to decode input: {0}")]
    Encoding(String),

    /// Empty file.
    #[error("CSV file is empty")]
    EmptyFile,

    /// No headers found.
    #[error("No headers found in CSV")]
    NoHeaders,

    /// Two columns share a name.
    #[error("Duplicate column header: {0}")]
    DuplicateHeader(String),
}

// =============================================================================
// Transformation Errors
// =============================================================================

/// Errors during the transform stage.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A configured column is absent from the input schema.
    /// Fatal: the pipeline cannot proceed with a wrong schema.
    #[error("Column not found: {0}")]
    ColumnNotFound(String),
}

// =============================================================================
// Load Errors
// =============================================================================

/// Errors while writing the output file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// I/O failure on the output path.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failure.
    #[error("Failed to serialize output: {0}")]
    Csv(#[from] csv::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the main error type returned by [`crate::transform::pipeline::run`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Extraction error.
    #[error("Extract error: {0}")]
    Extract(#[from] ExtractError),

    /// Transformation error.
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    /// Load error.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for extraction.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Result type for transformation.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // ExtractError -> PipelineError
        let extract_err = ExtractError::NotFound(PathBuf::from("/tmp/missing.csv"));
        let pipeline_err: PipelineError = extract_err.into();
        assert!(pipeline_err.to_string().contains("missing.csv"));

        // TransformError -> PipelineError
        let transform_err = TransformError::ColumnNotFound("SalePrice".into());
        let pipeline_err: PipelineError = transform_err.into();
        assert!(pipeline_err.to_string().contains("SalePrice"));
    }

    #[test]
    fn test_not_found_carries_path() {
        let err = ExtractError::NotFound(PathBuf::from("data/AmesHousing.csv"));
        let msg = err.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("AmesHousing.csv"));
    }
}
