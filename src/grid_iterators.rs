use std::fmt;

use crate::cells::Coordinate;
use crate::units::{ColumnIndex, ColumnsCount, RowIndex, RowsCount};

/// Row-major iteration over every coordinate of a grid.
#[derive(Clone)]
pub struct CellIter {
    columns: usize,
    current_cell_number: usize,
    cells_count: usize,
}

impl CellIter {
    /// `cells_count` comes from an already allocated grid, so it is known not to overflow.
    pub(crate) fn new(columns: ColumnsCount, cells_count: usize) -> CellIter {
        CellIter {
            columns: columns.0,
            current_cell_number: 0,
            cells_count,
        }
    }
}

impl fmt::Debug for CellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = Coordinate::from_row_major_index(self.current_cell_number, self.columns);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells_count - self.current_cell_number;
        (remaining, Some(remaining))
    }
}

/// Iteration over a grid one whole row at a time, top to bottom.
#[derive(Debug, Copy, Clone)]
pub struct RowIter {
    current_row: usize,
    rows: RowsCount,
    columns: ColumnsCount,
}

impl RowIter {
    pub(crate) fn new(rows: RowsCount, columns: ColumnsCount) -> RowIter {
        RowIter {
            current_row: 0,
            rows,
            columns,
        }
    }
}

impl ExactSizeIterator for RowIter {}
impl Iterator for RowIter {
    type Item = Vec<Coordinate>;

    fn next(&mut self) -> Option<Self::Item> {
        let RowsCount(rows_count) = self.rows;
        if self.current_row < rows_count {
            let ColumnsCount(length) = self.columns;
            let row = self.current_row;
            let coords = (0..length)
                .map(|col| Coordinate::from_row_column_indices(RowIndex(row), ColumnIndex(col)))
                .collect();
            self.current_row += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows.0 - self.current_row;
        (remaining, Some(remaining))
    }
}
