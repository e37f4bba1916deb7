//! Import error types

use thiserror::Error;

/// Result type for import operations
pub type ImportResult<T> = std::result::Result<T, ImportError>;

/// Errors that can occur while reading rows
#[derive(Debug, Error)]
pub enum ImportError {
    /// Typed-record reads need resolved titles to bind columns against
    #[error("No titles configured: typed records need resolved leaf titles to bind against")]
    MissingTitles,

    /// A cell value could not be adapted to its field's declared type by
    /// any step of the coercion cascade
    #[error("Cannot coerce {kind} value at cell {address} into field '{field}'")]
    Coercion {
        /// A1-style address of the offending cell
        address: String,
        /// Field the cell is bound to
        field: String,
        /// Kind of the native cell value
        kind: &'static str,
    },

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] sheetbind_core::Error),
}
