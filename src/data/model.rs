use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Row – one decoded line
// ---------------------------------------------------------------------------

/// One CSV line as an ordered list of text fields.
///
/// Rows are not required to share a width; ragged grids are legal.
pub type Row = Vec<String>;

// ---------------------------------------------------------------------------
// Grid – the complete decoded CSV
// ---------------------------------------------------------------------------

/// The full decoded CSV content.  Row 0, when present, is the header.
///
/// A `Grid` is never mutated once built: filtering produces a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    pub fn new(rows: Vec<Row>) -> Self {
        Grid { rows }
    }

    /// All rows, header included.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row 0, or an empty slice for an empty grid.
    pub fn header(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Rows 1.. (everything after the header).
    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Number of rows, header included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of the header row.
    pub fn column_count(&self) -> usize {
        self.header().len()
    }

    /// Widest row in the grid; ragged rows may exceed the header.
    pub fn max_width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Field text at `(row, col)`, or `""` when either index is out of range.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl From<Vec<Row>> for Grid {
    fn from(rows: Vec<Row>) -> Self {
        Grid::new(rows)
    }
}
