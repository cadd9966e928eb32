//! # grid_maze
//!
//! An interactive maze editor and solver. A [Grid] holds walls and water between a fixed start
//! cell in the top-left corner and a fixed end cell in the bottom-right corner. Paths are
//! found with [breadth-first](https://en.wikipedia.org/wiki/Breadth-first_search) or
//! [depth-first](https://en.wikipedia.org/wiki/Depth-first_search) search over the four
//! axis-aligned neighbours of a cell; movement is uniform-cost and never diagonal.
//! [Connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) of the grid
//! are tracked to avoid flood-filling behaviour if no path exists.
//!
//! The [game] module contains the text-mode presentation layer driven by the `maze` binary.
pub mod cell;
pub mod error;
pub mod game;
pub mod maze_grid;
pub mod search;
pub mod solver;

pub use cell::CellKind;
pub use error::MazeError;
pub use maze_grid::Grid;
pub use solver::{bfs::BfsSolver, dfs::DfsSolver, GridSolver, Strategy};

use grid_util::Point;

/// Smallest number of rows and of columns a grid may have.
pub const MIN_DIMENSION: i32 = 2;

/// `(row, col)` offsets of the neighbours of a cell in the order searches generate them: up,
/// down, left, right. This order breaks ties between paths of equal length.
pub const NEIGHBOUR_ORDER: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The [Point] of the cell at `row` and `col`.
pub fn point_at(row: i32, col: i32) -> Point {
    Point::new(col, row)
}

/// Solves a [Grid] with a selectable [Strategy] and marks the result on it.
#[derive(Clone, Debug, Default)]
pub struct RouteCalculator {
    strategy: Strategy,
}

impl RouteCalculator {
    pub fn new(strategy: Strategy) -> RouteCalculator {
        RouteCalculator { strategy }
    }
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }
    /// Clears the previously marked path, computes a path from the start to the end of the
    /// grid and marks it. Obstacles are never touched.
    pub fn solve(&self, grid: &mut Grid) -> Option<Vec<Point>> {
        grid.reset();
        grid.update();
        let path = self.strategy.get_path(grid)?;
        grid.mark_path(&path);
        Some(path)
    }
}
