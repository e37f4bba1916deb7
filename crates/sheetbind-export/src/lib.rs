//! # sheetbind-export
//!
//! Renders resolved headers and record rows back into a grid: the mirror
//! of the import path. Merged header cells become merged regions, and
//! appended rows land under the header in the columns their leaf titles
//! bind.
//!
//! ## Example
//!
//! ```rust
//! use sheetbind_core::{CellValue, SheetGrid};
//! use sheetbind_export::{ExportRow, SheetExport};
//!
//! let mut grid = SheetGrid::new("out");
//! let mut export = SheetExport::new(&mut grid);
//! export.set_column_fields(&["id", "name"]).unwrap();
//!
//! let row: ExportRow = [
//!     ("id".to_owned(), CellValue::Number(1.0)),
//!     ("name".to_owned(), CellValue::string("Alice")),
//! ]
//! .into_iter()
//! .collect();
//! export.append_rows(&[row]).unwrap();
//!
//! assert_eq!(grid.get_value_at(1, 1), CellValue::string("Alice"));
//! ```

pub mod error;
pub mod session;

pub use error::{ExportError, ExportResult};
pub use session::{ExportRow, SheetExport};
