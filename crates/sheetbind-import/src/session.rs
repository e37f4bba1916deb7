//! The sheet import session
//!
//! One [`SheetImport`] owns the title/cursor state and the result buffer
//! for a single pass over one grid source. Everything is synchronous and
//! single-threaded; a long scan stops only through the boolean-returning
//! callback variant.

use crate::bind::RecordBindings;
use crate::error::{ImportError, ImportResult};
use crate::shape::{Mappings, Records, RowShape, Sequences};
use crate::source::RowSource;
use sheetbind_core::{Cursor, HeaderCell, ResolvedTitles};

/// Streaming importer binding grid rows to records
///
/// Configure titles (or cursors) first, then drive one of the
/// [`read_rows`](SheetImport::read_rows) call shapes. Every invocation
/// appends one list to the result buffer, never overwrites, and the row
/// cursor advances with each consumed row, so a later invocation resumes
/// after the last row read.
pub struct SheetImport<'g, S: RowShape> {
    source: &'g dyn RowSource,
    shape: S,
    titles: Option<ResolvedTitles>,
    cursor: Cursor,
    physical_rows: usize,
    read_lists: Vec<Vec<S::Record>>,
}

impl<'g> SheetImport<'g, Sequences> {
    /// Import rows as ordered value sequences
    pub fn sequences(source: &'g dyn RowSource) -> Self {
        Self::with_shape(source, Sequences)
    }
}

impl<'g> SheetImport<'g, Mappings> {
    /// Import rows as keyed maps
    pub fn mappings(source: &'g dyn RowSource) -> Self {
        Self::with_shape(source, Mappings)
    }
}

impl<'g, T> SheetImport<'g, Records<T>> {
    /// Import rows as typed records through a binding table
    pub fn records(source: &'g dyn RowSource, bindings: RecordBindings<T>) -> Self {
        Self::with_shape(source, Records::new(bindings))
    }
}

impl<'g, S: RowShape> SheetImport<'g, S> {
    /// Create a session with an explicit row shape
    pub fn with_shape(source: &'g dyn RowSource, shape: S) -> Self {
        let physical_rows = source.row_count();
        Self {
            source,
            shape,
            titles: None,
            cursor: Cursor::new(),
            physical_rows,
            read_lists: Vec::new(),
        }
    }

    // === Title Configuration ===

    /// Resolve a header arrangement and move the row cursor past it
    ///
    /// The row cursor never moves backwards here: a header ending above
    /// the current cursor leaves the cursor where it is.
    pub fn set_titles(&mut self, grid: Vec<Vec<HeaderCell>>) -> ImportResult<&mut Self> {
        let titles = ResolvedTitles::resolve(grid)?;
        let end = titles.header_end_row() as i32;
        self.cursor.set_row(|prev| prev.max(end));
        self.install_titles(titles);
        Ok(self)
    }

    /// Resolve a header arrangement with a minimum header height
    ///
    /// The cursor lands on `max(last occupied row, first occupied row +
    /// min_rows - 1)`, regardless of its previous value.
    pub fn set_titles_spanning(
        &mut self,
        min_rows: u32,
        grid: Vec<Vec<HeaderCell>>,
    ) -> ImportResult<&mut Self> {
        let titles = ResolvedTitles::resolve(grid)?;
        let end = titles.header_end_row() as i32;
        let floor = titles.header_start_row() as i32 + min_rows as i32 - 1;
        self.cursor.set_row(|_| end.max(floor));
        self.install_titles(titles);
        Ok(self)
    }

    /// Configure a flat field list as a single span-1 header row
    pub fn set_column_fields<F: AsRef<str>>(&mut self, fields: &[F]) -> ImportResult<&mut Self> {
        let row = fields
            .iter()
            .map(|f| HeaderCell::new(f.as_ref()))
            .collect();
        self.set_titles(vec![row])
    }

    /// Flat field list with a minimum header height
    pub fn set_column_fields_spanning<F: AsRef<str>>(
        &mut self,
        min_rows: u32,
        fields: &[F],
    ) -> ImportResult<&mut Self> {
        let row = fields
            .iter()
            .map(|f| HeaderCell::new(f.as_ref()))
            .collect();
        self.set_titles_spanning(min_rows, vec![row])
    }

    fn install_titles(&mut self, titles: ResolvedTitles) {
        self.shape.reset();
        self.titles = Some(titles);
    }

    /// The resolved titles, if configured
    pub fn titles(&self) -> Option<&ResolvedTitles> {
        self.titles.as_ref()
    }

    // === Cursor Overrides ===

    /// Transform the row cursor, bypassing header inference
    pub fn set_row_cursor<F: FnOnce(i32) -> i32>(&mut self, f: F) -> &mut Self {
        self.cursor.set_row(f);
        self
    }

    /// Transform the column cursor
    pub fn set_col_cursor<F: FnOnce(i32) -> i32>(&mut self, f: F) -> &mut Self {
        self.cursor.set_col(f);
        self
    }

    /// Current cursor position
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The source's row count, reported as-is
    pub fn physical_row_count(&self) -> usize {
        self.physical_rows
    }

    // === Streaming ===

    /// Read every row after the row cursor, collecting all records
    pub fn read_rows(&mut self) -> ImportResult<&[S::Record]> {
        self.load_rows(|_, _, _, _| true)?;
        Ok(self.latest())
    }

    /// Read every row, invoking a callback per materialized record
    ///
    /// The callback receives the record, the list accumulated so far, the
    /// row's true index in the grid, and the record's 0-based position
    /// within this invocation. Iteration always runs to completion.
    pub fn read_rows_with<F>(&mut self, mut on_row: F) -> ImportResult<&[S::Record]>
    where
        F: FnMut(&S::Record, &[S::Record], u32, usize),
    {
        self.load_rows(|record, records, row, index| {
            on_row(record, records, row, index);
            true
        })?;
        Ok(self.latest())
    }

    /// Read rows until the callback returns `false`
    ///
    /// The first `false` halts iteration immediately; rows already
    /// materialized stay in the appended list.
    pub fn read_rows_while<F>(&mut self, on_row: F) -> ImportResult<&[S::Record]>
    where
        F: FnMut(&S::Record, &[S::Record], u32, usize) -> bool,
    {
        self.load_rows(on_row)?;
        Ok(self.latest())
    }

    fn load_rows<F>(&mut self, mut on_row: F) -> ImportResult<()>
    where
        F: FnMut(&S::Record, &[S::Record], u32, usize) -> bool,
    {
        if self.shape.requires_titles() && self.titles.is_none() {
            return Err(ImportError::MissingTitles);
        }

        let start = self.cursor.row();
        let mut records: Vec<S::Record> = Vec::new();
        let source = self.source;

        for row in source.rows() {
            if (row.index as i32) <= start {
                continue;
            }
            self.cursor.set_row(|_| row.index as i32);
            let record =
                self.shape
                    .materialize(&row, self.titles.as_ref(), self.cursor.col())?;
            records.push(record);
            let index = records.len() - 1;
            if !on_row(&records[index], &records, row.index, index) {
                break;
            }
        }

        self.read_lists.push(records);
        Ok(())
    }

    // === Result Retrieval ===

    fn latest(&self) -> &[S::Record] {
        self.read_lists.last().map(Vec::as_slice).unwrap_or(&[])
    }

    /// The most recent invocation's records
    pub fn read_data(&self) -> Option<&[S::Record]> {
        self.read_lists.last().map(Vec::as_slice)
    }

    /// A specific invocation's records by index
    pub fn read_data_at(&self, index: usize) -> Option<&[S::Record]> {
        self.read_lists.get(index).map(Vec::as_slice)
    }

    /// Every invocation's records, in invocation order
    pub fn all_read_data(&self) -> &[Vec<S::Record>] {
        &self.read_lists
    }
}
