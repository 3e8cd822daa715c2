// Breadth first search over the open cells of a grid.
//
// Every step between two adjacent open cells costs the same, so plain BFS gives shortest paths
// without any of the priority queue machinery of Dijkstra. The visited bitset doubles as the
// frontier membership check: a cell is marked when it is queued, so it is queued at most once.

use std::collections::VecDeque;

use bit_set::BitSet;
use log::debug;

use crate::cells::{CompassPrimary, Coordinate};
use crate::errors::*;
use crate::grid::Grid;
use crate::utils::{self, FnvHashMap};

/// The result of a path search. Not finding a path is an expected outcome, not an error.
#[derive(Eq, PartialEq, Clone, Debug)]
pub enum PathOutcome {
    /// Cells from start to end inclusive, each one step from the next.
    Found(Vec<Coordinate>),
    Unreachable,
}

impl PathOutcome {
    pub fn is_found(&self) -> bool {
        matches!(*self, PathOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&[Coordinate]> {
        match *self {
            PathOutcome::Found(ref path) => Some(path.as_slice()),
            PathOutcome::Unreachable => None,
        }
    }

    /// Number of moves along the path, zero when start and end are the same cell.
    pub fn steps(&self) -> Option<usize> {
        self.path().map(|path| path.len() - 1)
    }
}

/// Row of the default start cell, when the grid is tall enough for it.
pub const DEFAULT_START_ROW: usize = 5;

/// The start and end cells used when a caller gives none: `(5, 1)` and the bottom right interior
/// corner. Short grids move the start up to the last interior row.
///
/// On an odd sized generated maze both cells are carve vertices, so both are open.
pub fn default_end_points(grid: &Grid) -> (Coordinate, Coordinate) {
    let last_row = grid.rows().0 - 2;
    let last_column = grid.columns().0 - 2;
    let start = Coordinate::new(DEFAULT_START_ROW.min(last_row), 1);
    (start, Coordinate::new(last_row, last_column))
}

/// Shortest path between two open cells of a grid, moving up, down, left or right.
///
/// Both endpoints must be on the grid (`OutOfBounds`) and open (`InvalidEndpoint`).
/// Ties between equally short routes are broken by neighbour order (up, down, left, right)
/// and queue order, so the same grid and endpoints always give the same path.
pub fn solve(grid: &Grid, start: Coordinate, end: Coordinate) -> Result<PathOutcome> {
    check_endpoint(grid, start)?;
    check_endpoint(grid, end)?;

    let mut visited = BitSet::with_capacity(grid.size());
    let mut parents: FnvHashMap<Coordinate, Option<Coordinate>> = utils::fnv_hashmap(grid.size());
    let mut frontier = VecDeque::new();

    mark_visited(grid, &mut visited, start);
    let _ = parents.insert(start, None);
    frontier.push_back(start);

    let mut expanded = 0;
    while let Some(current) = frontier.pop_front() {
        if current == end {
            break;
        }
        expanded += 1;

        for &direction in CompassPrimary::ALL.iter() {
            let neighbour = match grid.neighbour_at_direction(current, direction) {
                Some(coord) if grid.is_path(coord) => coord,
                _ => continue,
            };
            if mark_visited(grid, &mut visited, neighbour) {
                let _ = parents.insert(neighbour, Some(current));
                frontier.push_back(neighbour);
            }
        }
    }

    if !parents.contains_key(&end) {
        debug!("no path from {} to {} after expanding {} cells", start, end, expanded);
        return Ok(PathOutcome::Unreachable);
    }

    let path = reconstruct_path(&parents, end);
    debug!("path from {} to {}: {} steps, {} cells expanded",
           start, end, path.len() - 1, expanded);
    Ok(PathOutcome::Found(path))
}

fn check_endpoint(grid: &Grid, coord: Coordinate) -> Result<()> {
    if grid.get(coord)?.is_wall() {
        Err(ErrorKind::InvalidEndpoint(coord).into())
    } else {
        Ok(())
    }
}

/// Returns true if the cell was not visited before.
fn mark_visited(grid: &Grid, visited: &mut BitSet, coord: Coordinate) -> bool {
    grid.coordinate_to_index(coord)
        .map_or(false, |index| visited.insert(index))
}

/// Follow the parent links back from `end` until reaching the start, which has no parent.
fn reconstruct_path(parents: &FnvHashMap<Coordinate, Option<Coordinate>>,
                    end: Coordinate)
                    -> Vec<Coordinate> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(&Some(parent)) = parents.get(&current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}
