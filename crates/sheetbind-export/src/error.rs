//! Export error types

use thiserror::Error;

/// Result type for export operations
pub type ExportResult<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while writing headers and rows
#[derive(Debug, Error)]
pub enum ExportError {
    /// Field-keyed appends need resolved titles to place values
    #[error("No titles configured: field-keyed rows need resolved leaf titles to place values")]
    MissingTitles,

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] sheetbind_core::Error),
}
