use std::fmt;

use smallvec::SmallVec;

use crate::units::{ColumnIndex, RowIndex};

/// The state of a single grid cell.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CellState {
    Wall,
    Path,
}

impl CellState {
    #[inline]
    pub fn is_path(self) -> bool {
        self == CellState::Path
    }

    #[inline]
    pub fn is_wall(self) -> bool {
        self == CellState::Wall
    }
}

/// New grids start out solid.
impl Default for CellState {
    fn default() -> Self {
        CellState::Wall
    }
}

/// A `(row, col)` position on a grid, 0-indexed from the top left corner.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

pub type CoordinateSmallVec = SmallVec<[Coordinate; 4]>;

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Coordinate {
        Coordinate { row, col }
    }

    #[inline]
    pub fn from_row_column_indices(row_index: RowIndex, col_index: ColumnIndex) -> Coordinate {
        let (RowIndex(row), ColumnIndex(col)) = (row_index, col_index);
        Coordinate::new(row, col)
    }

    #[inline]
    pub fn from_row_major_index(index: usize, row_length: usize) -> Coordinate {
        Coordinate::new(index / row_length, index % row_length)
    }

    /// Creates a new `Coordinate` offset `steps` cells away in the given direction.
    /// Returns None if the result would have a negative component.
    ///
    /// There is no upper bound check here, that is up to the grid.
    pub fn offset(self, direction: CompassPrimary, steps: usize) -> Option<Coordinate> {
        let Coordinate { row, col } = self;
        match direction {
            CompassPrimary::North => row.checked_sub(steps).map(|r| Coordinate::new(r, col)),
            CompassPrimary::South => row.checked_add(steps).map(|r| Coordinate::new(r, col)),
            CompassPrimary::West => col.checked_sub(steps).map(|c| Coordinate::new(row, c)),
            CompassPrimary::East => col.checked_add(steps).map(|c| Coordinate::new(row, c)),
        }
    }

    /// The cell halfway between this coordinate and `other`.
    ///
    /// For two carve cells two steps apart on an axis this is the wall cell separating them.
    #[inline]
    pub fn midpoint(self, other: Coordinate) -> Coordinate {
        Coordinate::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }

    /// Are the two coordinates one step apart along a row or a column?
    pub fn is_adjacent(self, other: Coordinate) -> bool {
        let row_delta = (self.row as isize - other.row as isize).abs();
        let col_delta = (self.col as isize - other.col as isize).abs();
        row_delta + col_delta == 1
    }

    /// Both components odd, which is what makes a cell a vertex of the carve graph.
    #[inline]
    pub fn is_odd(self) -> bool {
        self.row % 2 == 1 && self.col % 2 == 1
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    West,
    East,
}

impl CompassPrimary {
    /// Neighbour enumeration order used everywhere: up, down, left, right.
    /// Path search tie breaking depends on this order staying fixed.
    pub const ALL: [CompassPrimary; 4] = [
        CompassPrimary::North,
        CompassPrimary::South,
        CompassPrimary::West,
        CompassPrimary::East,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_in_each_direction() {
        let c = Coordinate::new(3, 5);
        assert_eq!(c.offset(CompassPrimary::North, 1), Some(Coordinate::new(2, 5)));
        assert_eq!(c.offset(CompassPrimary::South, 2), Some(Coordinate::new(5, 5)));
        assert_eq!(c.offset(CompassPrimary::West, 2), Some(Coordinate::new(3, 3)));
        assert_eq!(c.offset(CompassPrimary::East, 1), Some(Coordinate::new(3, 6)));
    }

    #[test]
    fn offsets_past_zero_are_none() {
        let c = Coordinate::new(1, 0);
        assert_eq!(c.offset(CompassPrimary::North, 2), None);
        assert_eq!(c.offset(CompassPrimary::West, 1), None);
        assert_eq!(c.offset(CompassPrimary::North, 1), Some(Coordinate::new(0, 0)));
    }

    #[test]
    fn midpoint_of_carve_cells_is_the_wall_between() {
        let a = Coordinate::new(1, 1);
        assert_eq!(a.midpoint(Coordinate::new(1, 3)), Coordinate::new(1, 2));
        assert_eq!(a.midpoint(Coordinate::new(3, 1)), Coordinate::new(2, 1));
        assert_eq!(Coordinate::new(5, 3).midpoint(Coordinate::new(3, 3)),
                   Coordinate::new(4, 3));
    }

    #[test]
    fn adjacency() {
        let c = Coordinate::new(2, 2);
        assert!(c.is_adjacent(Coordinate::new(1, 2)));
        assert!(c.is_adjacent(Coordinate::new(2, 3)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coordinate::new(3, 3)));
        assert!(!c.is_adjacent(Coordinate::new(2, 4)));
    }

    #[test]
    fn row_major_index_conversion() {
        assert_eq!(Coordinate::from_row_major_index(0, 5), Coordinate::new(0, 0));
        assert_eq!(Coordinate::from_row_major_index(7, 5), Coordinate::new(1, 2));
        assert_eq!(Coordinate::from_row_major_index(24, 5), Coordinate::new(4, 4));
    }

    #[test]
    fn display_is_row_then_column() {
        assert_eq!(Coordinate::new(5, 1).to_string(), "(5, 1)");
    }

    #[test]
    fn default_cell_is_wall() {
        assert!(CellState::default().is_wall());
        assert!(CellState::Path.is_path());
    }
}
