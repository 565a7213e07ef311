//! Grid snapshots
//!
//! A [`Grid`] is a fixed-size table of [`CellValue`]s. Snapshots are never
//! edited in place: [`Grid::set`] returns a new grid that shares every row
//! with its source except the one that changed.

use crate::cell::{CellAddress, CellValue};
use crate::error::{Error, Result};
use crate::settings::GridSettings;
use crate::MAX_COLS;
use std::sync::Arc;

/// An immutable snapshot of the grid's cells
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: u32,
    cols: u16,
    cells: Vec<Arc<[CellValue]>>,
}

impl Grid {
    /// Create a grid with every cell empty
    ///
    /// Fails when either dimension is zero or when there are more columns
    /// than single letters to name them.
    pub fn new(rows: u32, cols: u16) -> Result<Self> {
        if rows == 0 || cols == 0 || cols > MAX_COLS {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        Ok(Self::empty(rows, cols))
    }

    fn empty(rows: u32, cols: u16) -> Self {
        let empty_row: Arc<[CellValue]> = vec![CellValue::Empty; cols as usize].into();
        let cells = (0..rows).map(|_| Arc::clone(&empty_row)).collect();

        Self { rows, cols, cells }
    }

    /// Create a grid using the dimensions in `settings`
    pub fn with_settings(settings: &GridSettings) -> Result<Self> {
        Self::new(settings.rows, settings.cols)
    }

    /// Number of rows
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Check whether an address lies inside the grid
    pub fn contains(&self, addr: CellAddress) -> bool {
        addr.row < self.rows && addr.col < self.cols
    }

    /// Get the value at an address
    pub fn get(&self, addr: CellAddress) -> Result<&CellValue> {
        self.validate_cell_position(addr.row, addr.col)?;
        Ok(&self.cells[addr.row as usize][addr.col as usize])
    }

    /// Get the value at row/column indices (0-based)
    pub fn get_at(&self, row: u32, col: u16) -> Result<&CellValue> {
        self.get(CellAddress::new(row, col))
    }

    /// Return a new grid with `value` stored at `addr`
    ///
    /// The receiver is left unchanged. Only the edited row is copied; all
    /// other rows are shared with `self`.
    pub fn set<V: Into<CellValue>>(&self, addr: CellAddress, value: V) -> Result<Grid> {
        self.validate_cell_position(addr.row, addr.col)?;

        let mut cells = self.cells.clone();
        let row = addr.row as usize;
        let mut edited = cells[row].to_vec();
        edited[addr.col as usize] = value.into();
        cells[row] = edited.into();

        Ok(Grid {
            rows: self.rows,
            cols: self.cols,
            cells,
        })
    }

    /// Return a new grid with `value` stored at row/column indices (0-based)
    pub fn set_at<V: Into<CellValue>>(&self, row: u32, col: u16, value: V) -> Result<Grid> {
        self.set(CellAddress::new(row, col), value)
    }

    /// Iterate over rows, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellValue]> + '_ {
        self.cells.iter().map(|row| &row[..])
    }

    fn validate_cell_position(&self, row: u32, col: u16) -> Result<()> {
        if row >= self.rows {
            return Err(Error::RowOutOfBounds(row, self.rows - 1));
        }
        if col >= self.cols {
            return Err(Error::ColumnOutOfBounds(col, self.cols - 1));
        }
        Ok(())
    }
}

impl Default for Grid {
    fn default() -> Self {
        let settings = GridSettings::default();
        Self::empty(settings.rows, settings.cols)
    }
}
