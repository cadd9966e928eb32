use grid_util::Point;

use crate::{
    maze_grid::Grid,
    search::Lifo,
    solver::{find_path, GridSolver},
};

/// Depth-first search. Neighbours are pushed up, down, left, right, so the rightward neighbour
/// is explored first. The path found is usually not a shortest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    fn get_path_single_goal(&self, grid: &Grid, start: Point, goal: Point) -> Option<Vec<Point>> {
        find_path(grid, start, goal, Lifo::default())
    }
}
