use grid_util::Point;

use crate::{
    maze_grid::Grid,
    search::Fifo,
    solver::{find_path, GridSolver},
};

/// Breadth-first search. The reported path is a shortest one; among several of equal length
/// the neighbour order up, down, left, right decides.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn get_path_single_goal(&self, grid: &Grid, start: Point, goal: Point) -> Option<Vec<Point>> {
        find_path(grid, start, goal, Fifo::default())
    }
}
