//! Row materialization shapes
//!
//! Each data row becomes one of three record shapes: an ordered sequence
//! of native values, a keyed map, or a typed record populated through a
//! field-binding table. Cells in columns left of the column cursor are
//! skipped in every shape.

use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::bind::RecordBindings;
use crate::coerce;
use crate::error::{ImportError, ImportResult};
use sheetbind_core::{CellAddress, CellValue, ResolvedTitles, RowCells};

/// A keyed row: field name (or synthesized cell address) → native value
pub type RowMap = BTreeMap<String, CellValue>;

/// How one data row turns into a record
pub trait RowShape {
    /// The materialized record type
    type Record;

    /// Whether this shape can only work against resolved titles
    fn requires_titles(&self) -> bool {
        false
    }

    /// Forget any state derived from a previous title configuration
    fn reset(&mut self) {}

    /// Materialize one row
    fn materialize(
        &mut self,
        row: &RowCells<'_>,
        titles: Option<&ResolvedTitles>,
        col_cursor: i32,
    ) -> ImportResult<Self::Record>;
}

fn survives(col: u16, col_cursor: i32) -> bool {
    col as i32 >= col_cursor
}

/// Ordered sequence of native values, no field binding
#[derive(Debug, Default)]
pub struct Sequences;

impl RowShape for Sequences {
    type Record = Vec<CellValue>;

    fn materialize(
        &mut self,
        row: &RowCells<'_>,
        _titles: Option<&ResolvedTitles>,
        col_cursor: i32,
    ) -> ImportResult<Self::Record> {
        let mut record = Vec::with_capacity(row.cells.len());
        for (col, value) in &row.cells {
            if !survives(*col, col_cursor) {
                continue;
            }
            record.push(value.effective_value().clone());
        }
        Ok(record)
    }
}

/// Keyed map; unbound cells get a synthesized `<letters><row>` key
#[derive(Debug, Default)]
pub struct Mappings;

impl RowShape for Mappings {
    type Record = RowMap;

    fn materialize(
        &mut self,
        row: &RowCells<'_>,
        titles: Option<&ResolvedTitles>,
        col_cursor: i32,
    ) -> ImportResult<Self::Record> {
        let mut record = RowMap::new();
        for (col, value) in &row.cells {
            if !survives(*col, col_cursor) {
                continue;
            }
            let key = titles
                .and_then(|t| t.leaf_for_col(*col))
                .map(|leaf| leaf.field.clone())
                .unwrap_or_else(|| CellAddress::new(row.index, *col).to_a1_string());
            record.insert(key, value.effective_value().clone());
        }
        Ok(record)
    }
}

/// Typed records populated through a [`RecordBindings`] table
///
/// Unbound cells are dropped; bound cells go through the coercion
/// cascade. The column→field resolution is cached per session.
pub struct Records<T> {
    bindings: RecordBindings<T>,
    col_fields: AHashMap<u16, Option<String>>,
}

impl<T> Records<T> {
    /// Create the typed shape from a binding table
    pub fn new(bindings: RecordBindings<T>) -> Self {
        Self {
            bindings,
            col_fields: AHashMap::new(),
        }
    }
}

impl<T> RowShape for Records<T> {
    type Record = T;

    fn requires_titles(&self) -> bool {
        true
    }

    fn reset(&mut self) {
        self.col_fields.clear();
    }

    fn materialize(
        &mut self,
        row: &RowCells<'_>,
        titles: Option<&ResolvedTitles>,
        col_cursor: i32,
    ) -> ImportResult<Self::Record> {
        let titles = titles.ok_or(ImportError::MissingTitles)?;
        let mut record = self.bindings.new_record();

        for (col, value) in &row.cells {
            if !survives(*col, col_cursor) {
                continue;
            }
            let field = self
                .col_fields
                .entry(*col)
                .or_insert_with(|| titles.leaf_for_col(*col).map(|leaf| leaf.field.clone()));
            let Some(field) = field.as_deref() else {
                continue;
            };
            match self.bindings.setter(field) {
                Some(setter) => {
                    coerce::apply_cell(setter, &mut record, field, value, row.index, *col)?;
                }
                None => {
                    log::debug!(
                        "no binding for field '{}', dropping cell at {}",
                        field,
                        CellAddress::new(row.index, *col)
                    );
                }
            }
        }

        Ok(record)
    }
}

impl<T> std::fmt::Debug for Records<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Records")
            .field("bindings", &self.bindings)
            .finish()
    }
}
