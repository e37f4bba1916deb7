//! The grid source boundary

use sheetbind_core::{RowCells, SheetGrid};

/// A source of rows for the streaming controller
///
/// Rows are yielded in increasing row-index order and each row's cells in
/// increasing column order; columns with no cell may simply be absent.
/// The engine never interprets raw file encodings; whatever produces the
/// rows has already classified every value.
pub trait RowSource {
    /// Number of physical rows, reported as-is without validation
    fn row_count(&self) -> usize;

    /// Iterate rows in increasing row order
    fn rows(&self) -> Box<dyn Iterator<Item = RowCells<'_>> + '_>;
}

impl RowSource for SheetGrid {
    fn row_count(&self) -> usize {
        self.row_count()
    }

    fn rows(&self) -> Box<dyn Iterator<Item = RowCells<'_>> + '_> {
        Box::new(self.iter_rows())
    }
}
