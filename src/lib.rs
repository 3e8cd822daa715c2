//! **cellmaze** generates grid mazes and finds shortest routes through them.
//!
//! A maze is a [`Grid`](grid/struct.Grid.html) of wall and path cells. Generation carves a perfect
//! maze with a randomized depth first search and then opens a few extra walls to make loops.
//! Solving is a breadth first search between two open cells.
//!
//! ```
//! use cellmaze::{cells::Coordinate, generators, pathing};
//!
//! let grid = generators::generate_maze(21, 21, Some(7)).unwrap();
//! let outcome = pathing::solve(&grid, Coordinate::new(1, 1), Coordinate::new(19, 19)).unwrap();
//! assert!(outcome.is_found());
//! ```

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod grid_iterators;
pub mod pathing;
pub mod units;
mod utils;
