use std::ops::RangeInclusive;

use bit_set::BitSet;
use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::cells::{CellState, CompassPrimary, Coordinate, CoordinateSmallVec};
use crate::errors::*;
use crate::grid::{Grid, MIN_DIMENSION};
use crate::units::{ColumnsCount, RowsCount};
use crate::utils;

pub const DEFAULT_MIN_LOOPS: usize = 2;
pub const DEFAULT_MAX_LOOPS: usize = 60;

/// Where the depth first carve always starts.
pub const CARVE_START: Coordinate = Coordinate { row: 1, col: 1 };

/// Outcome of a loop injection pass.
///
/// `realized` counts the wall cells actually opened and is never more than `requested`.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct LoopInjection {
    pub requested: usize,
    pub realized: usize,
}

/// Everything needed to generate one maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationOptions {
    rows: RowsCount,
    columns: ColumnsCount,
    seed: Option<u64>,
    loops: RangeInclusive<usize>,
}

impl GenerationOptions {
    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[inline]
    pub fn loops(&self) -> &RangeInclusive<usize> {
        &self.loops
    }
}

#[derive(Clone, Debug)]
pub struct GenerationOptionsBuilder {
    options: GenerationOptions,
}

impl GenerationOptionsBuilder {
    /// Defaults to a 31x31 maze, a fresh seed and 2..=60 loop attempts.
    pub fn new() -> GenerationOptionsBuilder {
        GenerationOptionsBuilder {
            options: GenerationOptions {
                rows: RowsCount(31),
                columns: ColumnsCount(31),
                seed: None,
                loops: DEFAULT_MIN_LOOPS..=DEFAULT_MAX_LOOPS,
            },
        }
    }

    pub fn rows(mut self, rows: RowsCount) -> Self {
        self.options.rows = rows;
        self
    }

    pub fn columns(mut self, columns: ColumnsCount) -> Self {
        self.options.columns = columns;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.options.seed = seed;
        self
    }

    /// How many loop openings to attempt, drawn uniformly from `min..=max`.
    /// `0..=0` turns loop injection off and leaves a perfect maze.
    pub fn loops(mut self, min: usize, max: usize) -> Self {
        self.options.loops = min..=max;
        self
    }

    pub fn build(self) -> Result<GenerationOptions> {
        let options = self.options;
        if options.loops.is_empty() {
            return Err(ErrorKind::InvalidLoopRange(*options.loops.start(), *options.loops.end())
                .into());
        }
        check_maze_dimensions(options.rows, options.columns)?;
        Ok(options)
    }
}

impl Default for GenerationOptionsBuilder {
    fn default() -> Self {
        GenerationOptionsBuilder::new()
    }
}

/// A generated maze along with how it came about.
#[derive(Clone, Debug)]
pub struct Maze {
    pub grid: Grid,
    /// The seed the grid was generated from, whether given or freshly drawn.
    pub seed: u64,
    /// Wall cells opened by the depth first carve.
    pub passages: usize,
    pub loops: LoopInjection,
}

/// Generate a maze of `rows` x `columns` cells with the default loop range.
///
/// Both dimensions must be odd and at least 3. Passing a seed makes the grid reproducible.
pub fn generate_maze(rows: usize, columns: usize, seed: Option<u64>) -> Result<Grid> {
    let options = GenerationOptionsBuilder::new()
        .rows(RowsCount(rows))
        .columns(ColumnsCount(columns))
        .seed(seed)
        .build()?;
    generate(&options).map(|maze| maze.grid)
}

/// Carve a perfect maze then open extra loops in it, as configured by `options`.
pub fn generate(options: &GenerationOptions) -> Result<Maze> {
    check_maze_dimensions(options.rows, options.columns)?;

    let seed = options.seed.unwrap_or_else(utils::fresh_seed);
    let mut rng = utils::seeded_rng(seed);

    let mut grid = Grid::new(options.rows, options.columns)?;
    let passages = recursive_backtracker(&mut grid, &mut rng)?;
    let loops = add_loops(&mut grid, options.loops.clone(), &mut rng)?;

    debug!("generated {}x{} maze from seed {}: {} passages, {:?}",
           options.rows.0, options.columns.0, seed, passages, loops);

    Ok(Maze {
        grid,
        seed,
        passages,
        loops,
    })
}

fn check_maze_dimensions(rows: RowsCount, columns: ColumnsCount) -> Result<()> {
    let (RowsCount(r), ColumnsCount(c)) = (rows, columns);
    let valid = |d: usize| d >= MIN_DIMENSION && d % 2 == 1;
    if valid(r) && valid(c) {
        Ok(())
    } else {
        Err(ErrorKind::InvalidDimension(r, c).into())
    }
}

/// Apply the recursive backtracker maze generation algorithm to an all wall grid.
///
/// Only cells with two odd coordinates take part as maze rooms. Starting from `(1, 1)` we walk
/// to a random unvisited room two steps away, opening the wall cell in between, and back up the
/// stack whenever the current room has nowhere left to go. Once the stack is empty every room
/// has been visited exactly once, so the open cells form a spanning tree: a perfect maze.
///
/// Returns how many wall cells between rooms were opened, one less than the number of rooms.
pub fn recursive_backtracker<R: Rng>(grid: &mut Grid, rng: &mut R) -> Result<usize> {
    let mut visited = BitSet::with_capacity(grid.size());
    let mut passages = 0;

    mark_visited(grid, &mut visited, CARVE_START)?;
    grid.set(CARVE_START, CellState::Path)?;
    let mut stack = vec![CARVE_START];

    while let Some(&current) = stack.last() {
        let neighbours = unvisited_room_neighbours(grid, &visited, current);

        if let Some(&next) = neighbours.choose(rng) {
            trace!("carving {} -> {}", current, next);
            grid.set(current.midpoint(next), CellState::Path)?;
            grid.set(next, CellState::Path)?;
            mark_visited(grid, &mut visited, next)?;
            stack.push(next);
            passages += 1;
        } else {
            let _ = stack.pop();
        }
    }

    Ok(passages)
}

fn mark_visited(grid: &Grid, visited: &mut BitSet, coord: Coordinate) -> Result<()> {
    let index = grid.coordinate_to_index(coord)
        .ok_or(ErrorKind::OutOfBounds(coord))?;
    let _ = visited.insert(index);
    Ok(())
}

/// Rooms two steps away, up/down/left/right, strictly inside the border and not yet visited.
fn unvisited_room_neighbours(grid: &Grid, visited: &BitSet, coord: Coordinate) -> CoordinateSmallVec {
    CompassPrimary::ALL.iter()
        .filter_map(|dir| coord.offset(*dir, 2))
        .filter(|room| grid.is_interior(*room))
        .filter(|room| {
            grid.coordinate_to_index(*room)
                .map_or(false, |index| !visited.contains(index))
        })
        .collect()
}

/// Randomly open some walls to introduce loops and so multiple routes through the maze.
///
/// The number of attempts is drawn uniformly from `loops`. Each attempt picks a random interior
/// cell and opens it only if it is a wall touching at least one open cell. A failed attempt is
/// skipped, not retried, so fewer loops than requested may be made. Cells are only ever opened,
/// never closed, so an already connected maze stays connected.
pub fn add_loops<R: Rng>(grid: &mut Grid,
                         loops: RangeInclusive<usize>,
                         rng: &mut R)
                         -> Result<LoopInjection> {
    if loops.is_empty() {
        return Err(ErrorKind::InvalidLoopRange(*loops.start(), *loops.end()).into());
    }

    let requested = rng.gen_range(loops);
    let (RowsCount(rows), ColumnsCount(columns)) = (grid.rows(), grid.columns());
    let mut realized = 0;

    for _ in 0..requested {
        let row = rng.gen_range(1..=rows - 2);
        let col = rng.gen_range(1..=columns - 2);
        let candidate = Coordinate::new(row, col);

        if grid.get(candidate)?.is_wall() && grid.has_adjacent_path(candidate) {
            trace!("opening loop at {}", candidate);
            grid.set(candidate, CellState::Path)?;
            realized += 1;
        }
    }

    Ok(LoopInjection { requested, realized })
}
