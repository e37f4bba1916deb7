//! Prelude module - common imports for sheetbind users
//!
//! ```rust
//! use sheetbind::prelude::*;
//! ```

pub use crate::{
    CellAddress,
    CellRange,
    // Cell types
    CellValue,
    Cursor,

    // Error types
    Error,
    ExportError,
    ExportRow,
    // Header types
    HeaderCell,
    ImportError,
    LeafTitle,

    // Binding types
    RecordBindings,
    ResolvedTitles,
    Result,
    RowMap,
    RowSource,

    SharedString,
    // Main types
    SheetExport,
    SheetGrid,
    SheetImport,
};
