use std::fmt;

use crate::cells::{CellState, CompassPrimary, Coordinate, CoordinateSmallVec};
use crate::errors::*;
use crate::grid_iterators::{CellIter, RowIter};
use crate::units::{ColumnsCount, RowsCount};

/// Smallest row or column count a grid can have: one interior cell inside the border.
pub const MIN_DIMENSION: usize = 3;

/// A dense rectangular grid of wall/path cells stored in row-major order.
///
/// A new grid is solid wall. Maze generation carves it in place, after which it is
/// only ever read.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    rows: RowsCount,
    columns: ColumnsCount,
    cells: Vec<CellState>,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: rows: {:?}, columns: {:?}, path cells: {}",
               self.rows.0, self.columns.0, self.path_cells_count())
    }
}

impl Grid {
    /// Allocate an all-wall grid.
    ///
    /// Fails with `InvalidDimension` if either dimension is below 3 or the cell count does not
    /// fit in a `usize`.
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<Grid> {
        let (RowsCount(rows_count), ColumnsCount(columns_count)) = (rows, columns);
        if rows_count < MIN_DIMENSION || columns_count < MIN_DIMENSION {
            return Err(ErrorKind::InvalidDimension(rows_count, columns_count).into());
        }
        let cells_count = rows_count.checked_mul(columns_count)
            .ok_or(ErrorKind::InvalidDimension(rows_count, columns_count))?;

        Ok(Grid {
            rows,
            columns,
            cells: vec![CellState::default(); cells_count],
        })
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Checked read of a cell.
    pub fn get(&self, coord: Coordinate) -> Result<CellState> {
        self.coordinate_to_index(coord)
            .map(|index| self.cells[index])
            .ok_or_else(|| ErrorKind::OutOfBounds(coord).into())
    }

    /// Checked write of a cell.
    pub fn set(&mut self, coord: Coordinate, state: CellState) -> Result<()> {
        let index = self.coordinate_to_index(coord)
            .ok_or(ErrorKind::OutOfBounds(coord))?;
        self.cells[index] = state;
        Ok(())
    }

    /// Is the coordinate inside the grid and open?
    /// Out of range coordinates are never paths.
    #[inline]
    pub fn is_path(&self, coord: Coordinate) -> bool {
        self.coordinate_to_index(coord)
            .map_or(false, |index| self.cells[index].is_path())
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Coordinate) -> bool {
        coord.row < self.rows.0 && coord.col < self.columns.0
    }

    /// On the outermost ring of cells.
    pub fn is_border(&self, coord: Coordinate) -> bool {
        self.is_valid_coordinate(coord) &&
        (coord.row == 0 || coord.col == 0 || coord.row == self.rows.0 - 1 ||
         coord.col == self.columns.0 - 1)
    }

    /// Strictly inside the border: `1 <= row <= rows - 2` and `1 <= col <= columns - 2`.
    #[inline]
    pub fn is_interior(&self, coord: Coordinate) -> bool {
        coord.row >= 1 && coord.col >= 1 && coord.row <= self.rows.0 - 2 &&
        coord.col <= self.columns.0 - 2
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn coordinate_to_index(&self, coord: Coordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row * self.columns.0 + coord.col)
        } else {
            None
        }
    }

    pub fn neighbour_at_direction(&self,
                                  coord: Coordinate,
                                  direction: CompassPrimary)
                                  -> Option<Coordinate> {
        coord.offset(direction, 1)
             .filter(|neighbour_coord| self.is_valid_coordinate(*neighbour_coord))
    }

    /// Cells directly up, down, left and right (in that order) of a coordinate that are on the
    /// grid, whatever their state.
    pub fn neighbours(&self, coord: Coordinate) -> CoordinateSmallVec {
        CompassPrimary::ALL.iter()
                           .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
                           .collect()
    }

    /// Any of the 4 neighbouring cells open?
    pub fn has_adjacent_path(&self, coord: Coordinate) -> bool {
        self.neighbours(coord).iter().any(|neighbour| self.is_path(*neighbour))
    }

    pub fn path_cells_count(&self) -> usize {
        self.cells.iter().filter(|state| state.is_path()).count()
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(self.columns, self.size())
    }

    #[inline]
    pub fn iter_row(&self) -> RowIter {
        RowIter::new(self.rows, self.columns)
    }
}
