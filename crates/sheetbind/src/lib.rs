//! # sheetbind
//!
//! A Rust library binding tabular data in a spreadsheet-like grid to and
//! from strongly-typed application records.
//!
//! The import path resolves a (possibly multi-row, merged-cell) header
//! arrangement into flat per-column bindings, then streams each data row
//! into one of three shapes: an ordered value sequence, a keyed map, or a
//! typed record populated through a field-binding table with a fixed
//! coercion cascade. The export path renders headers (merged regions
//! included) and record rows back into a grid.
//!
//! ## Example
//!
//! ```rust
//! use sheetbind::prelude::*;
//!
//! #[derive(Default, Debug, PartialEq)]
//! struct Person {
//!     id: i64,
//!     name: String,
//! }
//!
//! let mut grid = SheetGrid::new("people");
//! grid.set_value("A1", "id").unwrap();
//! grid.set_value("B1", "name").unwrap();
//! grid.set_value("A2", 1.0).unwrap();
//! grid.set_value("B2", "Alice").unwrap();
//!
//! let bindings = RecordBindings::<Person>::new()
//!     .bind("id", |p, v: i64| p.id = v)
//!     .bind("name", |p, v: String| p.name = v);
//!
//! let mut import = SheetImport::records(&grid, bindings);
//! import.set_column_fields(&["id", "name"]).unwrap();
//!
//! let people = import.read_rows().unwrap();
//! assert_eq!(people[0], Person { id: 1, name: "Alice".into() });
//! ```

pub mod prelude;

// Re-export core types
pub use sheetbind_core::{
    CellAddress,
    CellRange,
    // Cell types
    CellValue,
    // Cursor
    Cursor,
    // Error types
    Error,
    // Header types
    HeaderCell,
    LeafTitle,
    ResolvedTitles,
    Result,
    RowCells,
    SharedString,
    // Main types
    SheetGrid,
    MAX_COLS,
    // Constants
    MAX_ROWS,
};

// Re-export import types
pub use sheetbind_import::{
    FieldValue, ImportError, ImportResult, Mappings, RecordBindings, Records, Rejection, RowMap,
    RowShape, RowSource, Sequences, SheetImport,
};

// Re-export export types
pub use sheetbind_export::{ExportError, ExportResult, ExportRow, SheetExport};
