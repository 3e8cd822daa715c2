// Create the Error, ErrorKind, ResultExt, and Result types.
// Every fallible grid, generator and pathing operation in the crate returns `Result<T>`.
// Not finding a route is not an error, see `pathing::PathOutcome`.
use error_chain::*;

use crate::cells::Coordinate;

error_chain! {
    errors {
        InvalidDimension(rows: usize, columns: usize) {
            description("invalid grid dimensions")
            display("invalid grid dimensions {}x{}: dimensions must be at least 3, and odd for a maze", rows, columns)
        }

        OutOfBounds(coord: Coordinate) {
            description("coordinate outside the grid")
            display("coordinate {} is outside the grid", coord)
        }

        InvalidEndpoint(coord: Coordinate) {
            description("path endpoint is a wall")
            display("path endpoint {} is a wall cell", coord)
        }

        InvalidLoopRange(min: usize, max: usize) {
            description("empty loop count range")
            display("loop count range {}..={} is empty", min, max)
        }
    }
}
