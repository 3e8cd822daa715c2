use docopt::Docopt;
use log::{debug, info};
use serde_derive::Deserialize;
use cellmaze::{
    cells::Coordinate,
    generators::{self, GenerationOptionsBuilder},
    grid::Grid,
    grid_displays::{DisplayedGrid, PathDisplay, StartEndPointsDisplay},
    pathing::{self, PathOutcome},
    units,
};
use std::{
    io,
    io::prelude::*,
    fs::File,
};

const USAGE: &str = "Cellmaze

Usage:
    cellmaze_driver -h | --help
    cellmaze_driver [--rows=<r>] [--columns=<c>] [--seed=<s>] [--min-loops=<n>] [--max-loops=<m>] [--start-row=<y>] [--start-column=<x>] [--end-row=<y>] [--end-column=<x>] [--text-out=<path>] [--no-path]

Options:
    -h --help              Show this screen.
    --rows=<r>             Number of grid rows, odd and at least 3 [default: 31].
    --columns=<c>          Number of grid columns, odd and at least 3 [default: 31].
    --seed=<s>             Seed for the maze generator. A random seed is used (and logged) if not given.
    --min-loops=<n>        Fewest extra wall openings to attempt after carving [default: 2].
    --max-loops=<m>        Most extra wall openings to attempt after carving [default: 60].
    --start-row=<y>        Row of the path start. Defaults to 5, or the last interior row on smaller grids.
    --start-column=<x>     Column of the path start [default: 1].
    --end-row=<y>          Row of the path end. Defaults to the last interior row.
    --end-column=<x>       Column of the path end. Defaults to the last interior column.
    --text-out=<path>      Output file path for the text rendering of the maze, instead of stdout.
    --no-path              Only draw the maze and its start/end points, not the solution.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_rows: usize,
    flag_columns: usize,
    flag_seed: Option<u64>,
    flag_min_loops: usize,
    flag_max_loops: usize,
    flag_start_row: Option<usize>,
    flag_start_column: usize,
    flag_end_row: Option<usize>,
    flag_end_column: Option<usize>,
    flag_text_out: String,
    flag_no_path: bool,
}

// We'll put our errors in an `errors` module, and other modules in
// this crate will `use errors::*;` to get access to everything
// `error_chain!` creates.
mod errors {
    use error_chain::*;
    error_chain! {
        links {
            Maze(::cellmaze::errors::Error, ::cellmaze::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let log_env = env_logger::Env::new()
        .filter("CELLMAZE_LOG")
        .write_style("CELLMAZE_LOG_STYLE");
    env_logger::init_from_env(log_env);

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;
    debug!("driver arguments: {:?}", args);

    let options = GenerationOptionsBuilder::new()
        .rows(units::RowsCount(args.flag_rows))
        .columns(units::ColumnsCount(args.flag_columns))
        .seed(args.flag_seed)
        .loops(args.flag_min_loops, args.flag_max_loops)
        .build()?;

    let maze = generators::generate(&options)?;
    info!("maze seed {} ({} passages carved, {} of {} loops opened)",
          maze.seed, maze.passages, maze.loops.realized, maze.loops.requested);

    let (start, end) = end_points(&args, &maze.grid);
    let outcome = pathing::solve(&maze.grid, start, end)
        .chain_err(|| format!("Cannot solve the maze from {} to {}", start, end))?;

    if let PathOutcome::Unreachable = outcome {
        println!("No path found");
    }

    let text = render_maze(&maze.grid, start, end, &outcome, !args.flag_no_path);
    if args.flag_text_out.is_empty() {
        print!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

/// Start and end points from the arguments, falling back to `pathing::default_end_points`.
fn end_points(args: &MazeArgs, grid: &Grid) -> (Coordinate, Coordinate) {
    let (default_start, default_end) = pathing::default_end_points(grid);
    let start = Coordinate::new(args.flag_start_row.unwrap_or(default_start.row),
                                args.flag_start_column);
    let end = Coordinate::new(args.flag_end_row.unwrap_or(default_end.row),
                              args.flag_end_column.unwrap_or(default_end.col));
    (start, end)
}

fn render_maze(grid: &Grid,
               start: Coordinate,
               end: Coordinate,
               outcome: &PathOutcome,
               show_path: bool)
               -> String {
    let start_end_points = StartEndPointsDisplay::new(&[start], &[end]);
    let path_display = PathDisplay::new(outcome.path().filter(|_| show_path).unwrap_or(&[]));

    let rendered = DisplayedGrid::new(grid)
        .with_display(&start_end_points)
        .with_display(&path_display)
        .to_string();
    rendered
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
