//! The sheet export session

use std::collections::BTreeMap;

use crate::error::{ExportError, ExportResult};
use sheetbind_core::{CellRange, CellValue, Cursor, HeaderCell, ResolvedTitles, SheetGrid};

/// A keyed row to export: field name → value
pub type ExportRow = BTreeMap<String, CellValue>;

/// Writes resolved headers and record rows into a grid
///
/// The mirror of the import session: titles are resolved with the same
/// core resolver, header cells land at their laid-out positions (merged
/// regions included), and appended rows fill the columns their leaf
/// titles bind. The row cursor tracks the last written row.
pub struct SheetExport<'g> {
    grid: &'g mut SheetGrid,
    titles: Option<ResolvedTitles>,
    cursor: Cursor,
}

impl<'g> SheetExport<'g> {
    /// Create an export session over a grid
    pub fn new(grid: &'g mut SheetGrid) -> Self {
        Self {
            grid,
            titles: None,
            cursor: Cursor::new(),
        }
    }

    // === Title Configuration ===

    /// Resolve a header arrangement, render it, and move the cursor past it
    ///
    /// Every header cell's display text is written at its assigned
    /// position; cells spanning more than 1×1 register a merged region.
    pub fn set_titles(&mut self, grid: Vec<Vec<HeaderCell>>) -> ExportResult<&mut Self> {
        let titles = ResolvedTitles::resolve(grid)?;

        for cell in titles.cells() {
            self.grid
                .set_value_at(cell.start_row(), cell.start_col(), cell.text())?;
            if cell.row_span() > 1 || cell.col_span() > 1 {
                self.grid.merge(CellRange::from_indices(
                    cell.start_row(),
                    cell.start_col(),
                    cell.end_row(),
                    cell.end_col(),
                ))?;
            }
        }

        let end = titles.header_end_row() as i32;
        self.cursor.set_row(|prev| prev.max(end));
        self.titles = Some(titles);
        Ok(self)
    }

    /// Render a flat field list as a single span-1 header row
    pub fn set_column_fields<F: AsRef<str>>(&mut self, fields: &[F]) -> ExportResult<&mut Self> {
        let row = fields
            .iter()
            .map(|f| HeaderCell::new(f.as_ref()))
            .collect();
        self.set_titles(vec![row])
    }

    /// The resolved titles, if configured
    pub fn titles(&self) -> Option<&ResolvedTitles> {
        self.titles.as_ref()
    }

    /// Current cursor position
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Transform the row cursor, bypassing header inference
    pub fn set_row_cursor<F: FnOnce(i32) -> i32>(&mut self, f: F) -> &mut Self {
        self.cursor.set_row(f);
        self
    }

    // === Row Appends ===

    /// Append one grid row per record, leaf titles placing the fields
    pub fn append_rows(&mut self, records: &[ExportRow]) -> ExportResult<&mut Self> {
        self.append_rows_with(records, |_, value, _, _| value.clone())
    }

    /// Append records with a per-cell hook transforming each value
    ///
    /// The hook receives the field name, the record's value, the target
    /// row index, and the record's position within this call.
    pub fn append_rows_with<H>(
        &mut self,
        records: &[ExportRow],
        mut hook: H,
    ) -> ExportResult<&mut Self>
    where
        H: FnMut(&str, &CellValue, u32, usize) -> CellValue,
    {
        let titles = self.titles.as_ref().ok_or(ExportError::MissingTitles)?;

        for (index, record) in records.iter().enumerate() {
            let row = (self.cursor.row() + 1) as u32;
            for leaf in titles.leaves() {
                if let Some(value) = record.get(&leaf.field) {
                    let value = hook(&leaf.field, value, row, index);
                    self.grid.set_value_at(row, leaf.data_col(), value)?;
                }
            }
            self.cursor.set_row(|_| row as i32);
        }
        Ok(self)
    }

    /// Append one positional row under the data region, no field binding
    pub fn append_row_values(&mut self, values: &[CellValue]) -> ExportResult<&mut Self> {
        let row = (self.cursor.row() + 1) as u32;
        for (col, value) in values.iter().enumerate() {
            self.grid.set_value_at(row, col as u16, value.clone())?;
        }
        self.cursor.set_row(|_| row as i32);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(entries: &[(&str, CellValue)]) -> ExportRow {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_column_fields_render_header_row() {
        let mut grid = SheetGrid::new("out");
        let mut export = SheetExport::new(&mut grid);
        export.set_column_fields(&["id", "name"]).unwrap();

        assert_eq!(export.cursor().row(), 0);
        assert_eq!(grid.get_value_at(0, 0), CellValue::string("id"));
        assert_eq!(grid.get_value_at(0, 1), CellValue::string("name"));
        assert!(grid.merged_regions().is_empty());
    }

    #[test]
    fn test_merged_header_renders_regions() {
        let mut grid = SheetGrid::new("out");
        let mut export = SheetExport::new(&mut grid);
        export
            .set_titles(vec![
                vec![
                    HeaderCell::new("id").with_row_span(2),
                    HeaderCell::new("contact").with_col_span(2),
                ],
                vec![HeaderCell::new("phone"), HeaderCell::new("email")],
            ])
            .unwrap();

        assert_eq!(export.cursor().row(), 1);
        assert_eq!(grid.get_value_at(0, 0), CellValue::string("id"));
        assert_eq!(grid.get_value_at(0, 1), CellValue::string("contact"));
        assert_eq!(grid.get_value_at(1, 1), CellValue::string("phone"));
        assert_eq!(grid.get_value_at(1, 2), CellValue::string("email"));

        let merges = grid.merged_regions();
        assert_eq!(merges.len(), 2);
        assert!(merges.contains(&CellRange::from_indices(0, 0, 1, 0)));
        assert!(merges.contains(&CellRange::from_indices(0, 1, 0, 2)));
    }

    #[test]
    fn test_append_rows_under_header() {
        let mut grid = SheetGrid::new("out");
        let mut export = SheetExport::new(&mut grid);
        export.set_column_fields(&["id", "name"]).unwrap();
        export
            .append_rows(&[
                record(&[("id", CellValue::Number(1.0)), ("name", CellValue::string("Alice"))]),
                record(&[("id", CellValue::Number(2.0)), ("name", CellValue::string("Bob"))]),
            ])
            .unwrap();

        assert_eq!(export.cursor().row(), 2);
        assert_eq!(grid.get_value_at(1, 0), CellValue::Number(1.0));
        assert_eq!(grid.get_value_at(1, 1), CellValue::string("Alice"));
        assert_eq!(grid.get_value_at(2, 1), CellValue::string("Bob"));
    }

    #[test]
    fn test_append_rows_with_hook() {
        let mut grid = SheetGrid::new("out");
        let mut export = SheetExport::new(&mut grid);
        export.set_column_fields(&["id"]).unwrap();
        export
            .append_rows_with(
                &[record(&[("id", CellValue::Number(1.0))])],
                |field, value, _, _| {
                    assert_eq!(field, "id");
                    CellValue::Number(value.as_number().unwrap() * 10.0)
                },
            )
            .unwrap();

        assert_eq!(grid.get_value_at(1, 0), CellValue::Number(10.0));
    }

    #[test]
    fn test_append_needs_titles() {
        let mut grid = SheetGrid::new("out");
        let mut export = SheetExport::new(&mut grid);
        assert!(matches!(
            export.append_rows(&[record(&[("id", CellValue::Number(1.0))])]),
            Err(ExportError::MissingTitles)
        ));
    }

    #[test]
    fn test_append_row_values_positional() {
        let mut grid = SheetGrid::new("out");
        let mut export = SheetExport::new(&mut grid);
        export
            .append_row_values(&[CellValue::string("a"), CellValue::string("b")])
            .unwrap();
        export
            .append_row_values(&[CellValue::string("c")])
            .unwrap();

        assert_eq!(grid.get_value_at(0, 1), CellValue::string("b"));
        assert_eq!(grid.get_value_at(1, 0), CellValue::string("c"));
    }

    #[test]
    fn test_missing_fields_leave_gaps() {
        let mut grid = SheetGrid::new("out");
        let mut export = SheetExport::new(&mut grid);
        export.set_column_fields(&["id", "name"]).unwrap();
        export
            .append_rows(&[record(&[("name", CellValue::string("Alice"))])])
            .unwrap();

        assert_eq!(grid.value_at(1, 0), None);
        assert_eq!(grid.get_value_at(1, 1), CellValue::string("Alice"));
    }
}
