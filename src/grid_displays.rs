use std::fmt;

use itertools::Itertools;
use smallvec::SmallVec;

use crate::cells::Coordinate;
use crate::grid::Grid;
use crate::utils::{self, FnvHashSet};

pub const WALL_GLYPH: char = '#';
pub const PATH_GLYPH: char = ' ';

/// Something that can draw over individual cells of a text rendered grid.
pub trait GridDisplay {
    /// The glyph to show in a cell instead of its plain wall/path glyph, if any.
    fn render_cell_body(&self, _: Coordinate) -> Option<char> {
        None
    }
}

#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<Coordinate>,
}
impl PathDisplay {
    pub fn new(path: &[Coordinate]) -> Self {
        let mut on_path_coordinates = utils::fnv_hashset(path.len());
        on_path_coordinates.extend(path.iter().cloned());
        PathDisplay { on_path_coordinates }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: Coordinate) -> Option<char> {
        if self.on_path_coordinates.contains(&coord) {
            Some('.')
        } else {
            None
        }
    }
}

#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start_coordinates: SmallVec<[Coordinate; 4]>,
    end_coordinates: SmallVec<[Coordinate; 4]>,
}
impl StartEndPointsDisplay {
    pub fn new(starts: &[Coordinate], ends: &[Coordinate]) -> StartEndPointsDisplay {
        StartEndPointsDisplay {
            start_coordinates: starts.iter().cloned().collect(),
            end_coordinates: ends.iter().cloned().collect(),
        }
    }
}
impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: Coordinate) -> Option<char> {
        if self.start_coordinates.contains(&coord) {
            Some('S')
        } else if self.end_coordinates.contains(&coord) {
            Some('E')
        } else {
            None
        }
    }
}

/// A grid together with the displays drawn over it. Earlier displays win over later ones.
pub struct DisplayedGrid<'a> {
    grid: &'a Grid,
    displays: SmallVec<[&'a dyn GridDisplay; 4]>,
}

impl<'a> DisplayedGrid<'a> {
    pub fn new(grid: &'a Grid) -> DisplayedGrid<'a> {
        DisplayedGrid {
            grid,
            displays: SmallVec::new(),
        }
    }

    pub fn with_display(mut self, display: &'a dyn GridDisplay) -> Self {
        self.displays.push(display);
        self
    }

    fn glyph(&self, coord: Coordinate) -> char {
        self.displays
            .iter()
            .filter_map(|display| display.render_cell_body(coord))
            .next()
            .unwrap_or_else(|| plain_glyph(self.grid, coord))
    }
}

fn plain_glyph(grid: &Grid, coord: Coordinate) -> char {
    if grid.is_path(coord) {
        PATH_GLYPH
    } else {
        WALL_GLYPH
    }
}

impl<'a> fmt::Display for DisplayedGrid<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = self.grid
            .iter_row()
            .map(|row| row.into_iter().map(|coord| self.glyph(coord)).collect::<String>())
            .join("\n");
        writeln!(f, "{}", text)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", DisplayedGrid::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::CellState;
    use crate::units::{ColumnsCount, RowsCount};

    fn corridor() -> Grid {
        let mut g = Grid::new(RowsCount(3), ColumnsCount(5)).unwrap();
        for col in 1..4 {
            g.set(Coordinate::new(1, col), CellState::Path).unwrap();
        }
        g
    }

    #[test]
    fn plain_grid_text() {
        assert_eq!(corridor().to_string(), "#####\n#   #\n#####\n");
    }

    #[test]
    fn path_and_end_points_overlay() {
        let g = corridor();
        let path = [Coordinate::new(1, 1), Coordinate::new(1, 2), Coordinate::new(1, 3)];
        let ends = StartEndPointsDisplay::new(&path[..1], &path[2..]);
        let on_path = PathDisplay::new(&path);
        let text = DisplayedGrid::new(&g)
            .with_display(&ends)
            .with_display(&on_path)
            .to_string();
        assert_eq!(text, "#####\n#S.E#\n#####\n");
    }

    #[test]
    fn path_only_overlay() {
        let g = corridor();
        let on_path = PathDisplay::new(&[Coordinate::new(1, 2)]);
        let text = DisplayedGrid::new(&g).with_display(&on_path).to_string();
        assert_eq!(text, "#####\n# . #\n#####\n");
    }
}
