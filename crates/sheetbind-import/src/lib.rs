//! # sheetbind-import
//!
//! Header-resolved row streaming for sheetbind: binds data rows from a
//! grid source to ordered sequences, keyed maps, or typed records.
//!
//! A [`SheetImport`] session resolves a (possibly merged) header
//! arrangement into leaf column bindings, tracks the row/column cursor
//! separating header from data, and streams each data row through one of
//! three shapes. Typed records go through a [`RecordBindings`] table and
//! a fixed coercion cascade for value-kind mismatches.
//!
//! ## Example
//!
//! ```rust
//! use sheetbind_core::SheetGrid;
//! use sheetbind_import::{RecordBindings, SheetImport};
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

pub mod bind;
pub mod error;
pub mod session;
pub mod shape;
pub mod source;

mod coerce;

pub use bind::{FieldValue, RecordBindings, Rejection};
pub use error::{ImportError, ImportResult};
pub use session::SheetImport;
pub use shape::{Mappings, Records, RowMap, RowShape, Sequences};
pub use source::RowSource;
