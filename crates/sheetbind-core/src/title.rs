//! Header descriptors and title resolution
//!
//! A header is described as a 2-D arrangement of [`HeaderCell`]s mirroring
//! its visual layout; cells spanning several rows or columns represent
//! merged header cells. Resolution assigns each cell its absolute grid
//! position, then flattens the arrangement into the *leaf* titles, the
//! cells with no nested children, which are what data columns bind to.

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::collections::BTreeSet;

/// One header cell descriptor
///
/// `field` is the binding name used when materializing rows (it may be
/// empty for purely decorative cells); `text` is the display text used
/// when rendering the header, defaulting to the field name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderCell {
    field: String,
    text: Option<String>,
    row_span: u32,
    col_span: u16,
    #[cfg_attr(feature = "serde", serde(skip))]
    start_row: u32,
    #[cfg_attr(feature = "serde", serde(skip))]
    start_col: u16,
}

impl HeaderCell {
    /// Create a 1×1 header cell bound to the given field
    pub fn new<S: Into<String>>(field: S) -> Self {
        Self {
            field: field.into(),
            text: None,
            row_span: 1,
            col_span: 1,
            start_row: 0,
            start_col: 0,
        }
    }

    /// Set the display text
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the number of rows this cell spans
    pub fn with_row_span(mut self, rows: u32) -> Self {
        self.row_span = rows;
        self
    }

    /// Set the number of columns this cell spans
    pub fn with_col_span(mut self, cols: u16) -> Self {
        self.col_span = cols;
        self
    }

    /// The field name this cell binds to (may be empty)
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The display text (falls back to the field name)
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or(&self.field)
    }

    /// Rows spanned
    pub fn row_span(&self) -> u32 {
        self.row_span
    }

    /// Columns spanned
    pub fn col_span(&self) -> u16 {
        self.col_span
    }

    /// First row occupied (assigned during resolution)
    pub fn start_row(&self) -> u32 {
        self.start_row
    }

    /// First column occupied (assigned during resolution)
    pub fn start_col(&self) -> u16 {
        self.start_col
    }

    /// Last row occupied
    pub fn end_row(&self) -> u32 {
        self.start_row + self.row_span - 1
    }

    /// Last column occupied
    pub fn end_col(&self) -> u16 {
        self.start_col + self.col_span - 1
    }
}

/// A resolved leaf title: the binding between one header cell and the data
/// columns beneath it
#[derive(Debug, Clone, PartialEq)]
pub struct LeafTitle {
    /// Field name to populate
    pub field: String,
    /// First data column covered
    pub start_col: u16,
    /// Last data column covered
    pub end_col: u16,
    /// Last header row occupied by this title
    pub end_row: u32,
}

impl LeafTitle {
    /// The canonical data column bound to this title
    pub fn data_col(&self) -> u16 {
        self.start_col
    }

    /// Check whether a data column falls under this title
    pub fn binds_col(&self, col: u16) -> bool {
        self.start_col <= col && col <= self.end_col
    }
}

/// The outcome of resolving a header arrangement
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTitles {
    /// All header cells with their assigned positions
    cells: Vec<HeaderCell>,
    /// Leaf titles, in column order
    leaves: Vec<LeafTitle>,
    /// First row occupied by any header cell
    header_start_row: u32,
    /// Last row occupied by any header cell
    header_end_row: u32,
}

impl ResolvedTitles {
    /// Resolve a 2-D header arrangement
    ///
    /// Each inner vector is one visual header row; every cell takes the
    /// first column not occupied by an earlier merge, and marks its span
    /// as occupied for the rows it covers.
    pub fn resolve(grid: Vec<Vec<HeaderCell>>) -> Result<Self> {
        let mut cells = Vec::new();
        let mut occupied: BTreeSet<(u32, u16)> = BTreeSet::new();

        for (r, row) in grid.into_iter().enumerate() {
            let r = r as u32;
            let mut col: u32 = 0;
            for mut cell in row {
                if cell.row_span == 0 || cell.col_span == 0 {
                    return Err(Error::InvalidTitles(format!(
                        "header cell '{}' has a zero span",
                        cell.field
                    )));
                }
                while occupied.contains(&(r, col as u16)) {
                    col += 1;
                }
                let end_row = r + cell.row_span - 1;
                let end_col = col + cell.col_span as u32 - 1;
                if end_row >= MAX_ROWS || end_col >= MAX_COLS as u32 {
                    return Err(Error::InvalidTitles(format!(
                        "header cell '{}' exceeds the grid bounds",
                        cell.field
                    )));
                }
                cell.start_row = r;
                cell.start_col = col as u16;
                for rr in r..=end_row {
                    for cc in col..=end_col {
                        occupied.insert((rr, cc as u16));
                    }
                }
                col = end_col + 1;
                cells.push(cell);
            }
        }

        if cells.is_empty() {
            return Err(Error::InvalidTitles("empty header arrangement".into()));
        }

        let header_start_row = cells.iter().map(|c| c.start_row).min().unwrap_or(0);
        let header_end_row = cells.iter().map(|c| c.end_row()).max().unwrap_or(0);

        // A cell is a leaf when no later-row cell sits within its column span
        let mut leaves: Vec<LeafTitle> = cells
            .iter()
            .filter(|t| {
                !cells.iter().any(|u| {
                    u.start_row > t.start_row
                        && u.start_col >= t.start_col
                        && u.end_col() <= t.end_col()
                })
            })
            .map(|t| LeafTitle {
                field: t.field.clone(),
                start_col: t.start_col,
                end_col: t.end_col(),
                end_row: t.end_row(),
            })
            .collect();
        leaves.sort_by_key(|l| l.start_col);

        Ok(Self {
            cells,
            leaves,
            header_start_row,
            header_end_row,
        })
    }

    /// Resolve a flat field-name list as a single span-1 header row
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self> {
        let row = fields
            .iter()
            .map(|f| HeaderCell::new(f.as_ref()))
            .collect();
        Self::resolve(vec![row])
    }

    /// All header cells with their assigned positions
    pub fn cells(&self) -> &[HeaderCell] {
        &self.cells
    }

    /// Leaf titles in column order
    pub fn leaves(&self) -> &[LeafTitle] {
        &self.leaves
    }

    /// First row occupied by the header
    pub fn header_start_row(&self) -> u32 {
        self.header_start_row
    }

    /// Last row occupied by the header
    pub fn header_end_row(&self) -> u32 {
        self.header_end_row
    }

    /// Find the leaf title bound to a data column
    pub fn leaf_for_col(&self, col: u16) -> Option<&LeafTitle> {
        self.leaves.iter().find(|l| l.binds_col(col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flat_row_one_leaf_per_descriptor() {
        let titles =
            ResolvedTitles::from_fields(&["id", "name", "age"]).unwrap();

        assert_eq!(titles.leaves().len(), 3);
        assert_eq!(titles.header_end_row(), 0);

        let leaf = titles.leaf_for_col(1).unwrap();
        assert_eq!(leaf.field, "name");
        assert_eq!(leaf.data_col(), 1);
        assert_eq!(leaf.end_row, 0);
    }

    #[test]
    fn test_merged_layout_assigns_positions() {
        // ┌──────┬───────────────┬──────┐
        // │  id  │    contact    │ note │
        // │      ├───────┬───────┤      │
        // │      │ phone │ email │      │
        // └──────┴───────┴───────┴──────┘
        let titles = ResolvedTitles::resolve(vec![
            vec![
                HeaderCell::new("id").with_row_span(2),
                HeaderCell::new("contact").with_col_span(2),
                HeaderCell::new("note").with_row_span(2),
            ],
            vec![HeaderCell::new("phone"), HeaderCell::new("email")],
        ])
        .unwrap();

        let cells = titles.cells();
        assert_eq!(cells[0].start_col(), 0); // id
        assert_eq!(cells[1].start_col(), 1); // contact
        assert_eq!(cells[2].start_col(), 3); // note
        assert_eq!(cells[3].start_row(), 1); // phone, shifted past id
        assert_eq!(cells[3].start_col(), 1);
        assert_eq!(cells[4].start_col(), 2); // email

        assert_eq!(titles.header_end_row(), 1);

        let fields: Vec<_> = titles.leaves().iter().map(|l| l.field.as_str()).collect();
        assert_eq!(fields, vec!["id", "phone", "email", "note"]);

        assert_eq!(titles.leaf_for_col(0).unwrap().field, "id");
        assert_eq!(titles.leaf_for_col(2).unwrap().field, "email");
        assert_eq!(titles.leaf_for_col(3).unwrap().field, "note");
        assert!(titles.leaf_for_col(4).is_none());
    }

    #[test]
    fn test_leaf_spanning_columns_binds_whole_range() {
        let titles = ResolvedTitles::resolve(vec![vec![
            HeaderCell::new("id"),
            HeaderCell::new("span").with_col_span(3),
        ]])
        .unwrap();

        let leaf = titles.leaf_for_col(2).unwrap();
        assert_eq!(leaf.field, "span");
        assert_eq!(leaf.data_col(), 1);
        assert!(titles.leaf_for_col(3).unwrap().binds_col(3));
        assert!(titles.leaf_for_col(4).is_none());
    }

    #[test]
    fn test_invalid_titles() {
        assert!(ResolvedTitles::resolve(vec![]).is_err());
        assert!(ResolvedTitles::resolve(vec![vec![]]).is_err());
        assert!(ResolvedTitles::resolve(vec![vec![
            HeaderCell::new("x").with_row_span(0)
        ]])
        .is_err());
    }

    #[test]
    fn test_display_text_falls_back_to_field() {
        let plain = HeaderCell::new("id");
        assert_eq!(plain.text(), "id");

        let titled = HeaderCell::new("id").with_text("编号");
        assert_eq!(titled.text(), "编号");
    }
}
