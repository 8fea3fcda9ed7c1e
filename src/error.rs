use std::io;
use thiserror::Error;

/// Result type for plotting operations
pub type PlotResult<T> = Result<T, PlotError>;

/// Error types for reading, rendering and writing logs
#[derive(Error, Debug)]
pub enum PlotError {
    /// Input file could not be opened or read
    #[error("Failed to read {path}: {reason}")]
    ReadInput {
        /// Input path as given
        path: String,
        /// Underlying cause
        reason: String,
    },

    /// Input file has no rows at all
    #[error("No data in {0}")]
    EmptyInput(String),

    /// Input file has rows but none of them parsed into a sample
    #[error("No numeric data found in {0}")]
    NoNumericData(String),

    /// Output file could not be written
    #[error("Failed to write {path}: {reason}")]
    WriteOutput {
        /// Output path as given
        path: String,
        /// Underlying cause
        reason: String,
    },

    /// Output extension names a format we cannot produce
    #[error("Failed to write {path}: unsupported output format '{extension}'")]
    UnsupportedFormat {
        /// Output path as given
        path: String,
        /// The offending extension
        extension: String,
    },

    /// Drawing the chart failed before anything was written
    #[error("Render error: {0}")]
    RenderError(String),

    /// Invalid options
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV encoding or decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl PlotError {
    /// Process exit code for this error category
    pub fn exit_code(&self) -> u8 {
        match self {
            PlotError::ReadInput { .. } => 2,
            PlotError::EmptyInput(_) | PlotError::NoNumericData(_) => 3,
            PlotError::WriteOutput { .. } | PlotError::UnsupportedFormat { .. } => 5,
            _ => 1,
        }
    }
}
