//! # sheetbind-core
//!
//! Core data structures for the sheetbind binding library.
//!
//! This crate provides the fundamental types used throughout sheetbind:
//! - [`CellValue`] - Native cell values (numbers, strings, booleans, dates)
//! - [`CellAddress`] and [`CellRange`] - Cell addressing and ranges
//! - [`SheetGrid`] - A named sparse grid of cells with merged regions
//! - [`HeaderCell`], [`ResolvedTitles`] - Header descriptors and the
//!   title resolver that turns a merged-header arrangement into leaf
//!   column bindings
//! - [`Cursor`] - The row/column position separating header from data
//!
//! ## Example
//!
//! ```rust
//! use sheetbind_core::{HeaderCell, ResolvedTitles, SheetGrid};
//!
//! let mut grid = SheetGrid::new("people");
//! grid.set_value("A1", "id").unwrap();
//! grid.set_value("B1", "name").unwrap();
//! grid.set_value_at(1, 0, 1.0).unwrap();
//! grid.set_value_at(1, 1, "Alice").unwrap();
//!
//! let titles = ResolvedTitles::resolve(vec![vec![
//!     HeaderCell::new("id"),
//!     HeaderCell::new("name"),
//! ]]).unwrap();
//! assert_eq!(titles.leaf_for_col(1).unwrap().field, "name");
//! ```

pub mod cell;
pub mod cursor;
pub mod error;
pub mod grid;
pub mod row;
pub mod title;

// Re-exports for convenience
pub use cell::{CellAddress, CellRange, CellValue, SharedString};
pub use cursor::Cursor;
pub use error::{Error, Result};
pub use grid::SheetGrid;
pub use row::RowCells;
pub use title::{HeaderCell, LeafTitle, ResolvedTitles};

/// Maximum number of rows in a grid
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a grid
pub const MAX_COLS: u16 = 16_384;
