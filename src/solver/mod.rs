use crate::maze_grid::Grid;
use crate::search::{graph_search, Frontier};
use core::fmt;
use grid_util::Point;
use log::{info, warn};

pub mod bfs;
pub mod dfs;

use bfs::BfsSolver;
use dfs::DfsSolver;

pub trait GridSolver {
    /// Computes a path from start to goal, both included. Returns [None] if the goal cannot be
    /// reached or either point lies outside the grid.
    fn get_path_single_goal(&self, grid: &Grid, start: Point, goal: Point) -> Option<Vec<Point>>;

    /// Computes a path from the start cell of the grid to its end cell.
    fn get_path(&self, grid: &Grid) -> Option<Vec<Point>> {
        self.get_path_single_goal(grid, grid.start(), grid.end())
    }
}

/// Whether the components decide reachability from `start` exactly. They count the start cell
/// of the grid as passable, which a search leaving from any other origin never enters, so for
/// such origins they can only rule paths out.
fn components_exact(grid: &Grid, start: &Point) -> bool {
    !grid.components_dirty && *start == grid.start()
}

/// Runs the shared search over the grid with the given frontier.
///
/// Neighbours are generated up, down, left, right and entered only if traversable. When the
/// components are up to date and place the goal on another component than a passable start,
/// no search is done.
pub(crate) fn find_path<FR>(
    grid: &Grid,
    start: Point,
    goal: Point,
    frontier: FR,
) -> Option<Vec<Point>>
where
    FR: Frontier<usize>,
{
    if !grid.point_in_bounds(&start) || !grid.point_in_bounds(&goal) {
        return None;
    }
    let components_valid = !grid.components_dirty && grid.is_passable(&start);
    if components_valid && grid.unreachable(&start, &goal) {
        info!("{} is not reachable from {}", goal, start);
        return None;
    }
    let path = graph_search(
        &start,
        frontier,
        |point| grid.neighborhood_points(point),
        |point| grid.is_traversable_point(point),
        |point| *point == goal,
    );
    match &path {
        Some(path) => info!("Found path of {} cells from {} to {}", path.len(), start, goal),
        None if components_exact(grid, &start) => {
            warn!("Reachable goal could not be pathed to, is reachable graph correct?")
        }
        None => info!("{} is not reachable from {}", goal, start),
    }
    path
}

/// Selects one of the traversal strategies at run time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Finds a shortest path.
    #[default]
    BreadthFirst,
    /// Finds some path, typically not a shortest one.
    DepthFirst,
}

impl GridSolver for Strategy {
    fn get_path_single_goal(&self, grid: &Grid, start: Point, goal: Point) -> Option<Vec<Point>> {
        match self {
            Strategy::BreadthFirst => BfsSolver.get_path_single_goal(grid, start, goal),
            Strategy::DepthFirst => DfsSolver.get_path_single_goal(grid, start, goal),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::BreadthFirst => write!(f, "BFS"),
            Strategy::DepthFirst => write!(f, "DFS"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{point_at, CellKind};

    #[test]
    fn strategies_dispatch_to_solvers() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.place_obstacle(1, 1, CellKind::Wall);
        assert_eq!(
            Strategy::BreadthFirst.get_path(&grid),
            BfsSolver.get_path(&grid)
        );
        assert_eq!(Strategy::DepthFirst.get_path(&grid), DfsSolver.get_path(&grid));
    }

    #[test]
    fn out_of_bounds_endpoints_have_no_path() {
        let grid = Grid::new(3, 3).unwrap();
        for strategy in [Strategy::BreadthFirst, Strategy::DepthFirst] {
            assert!(strategy
                .get_path_single_goal(&grid, point_at(0, 0), point_at(3, 3))
                .is_none());
            assert!(strategy
                .get_path_single_goal(&grid, point_at(-1, 0), point_at(2, 2))
                .is_none());
        }
    }

    /// Components that were not regenerated after placing walls are not trusted.
    #[test]
    fn dirty_components_fall_back_to_search() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.place_obstacle(0, 1, CellKind::Wall);
        grid.place_obstacle(1, 0, CellKind::Wall);
        assert!(grid.components_dirty);
        assert!(Strategy::BreadthFirst.get_path(&grid).is_none());
        grid.update();
        assert!(Strategy::DepthFirst.get_path(&grid).is_none());
    }

    /// A wall as origin is never checked for traversability.
    #[test]
    fn search_starts_from_any_cell() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.place_obstacle(1, 1, CellKind::Wall);
        let path = Strategy::BreadthFirst
            .get_path_single_goal(&grid, point_at(1, 1), point_at(2, 2))
            .unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], point_at(1, 1));
    }

    /// Components join cells through the start cell, which a search from elsewhere never
    /// enters; they are only exact for searches leaving from the start cell.
    #[test]
    fn start_cell_blocks_other_origins() {
        //  __
        // |S |
        // | #|
        //  __
        let mut grid = Grid::new(2, 2).unwrap();
        grid.place_obstacle(1, 1, CellKind::Wall);
        grid.update();
        let (from, to) = (point_at(0, 1), point_at(1, 0));
        assert!(grid.reachable(&from, &to));
        assert!(!components_exact(&grid, &from));
        assert!(components_exact(&grid, &grid.start()));
        for strategy in [Strategy::BreadthFirst, Strategy::DepthFirst] {
            assert!(strategy.get_path_single_goal(&grid, from, to).is_none());
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(Strategy::BreadthFirst.to_string(), "BFS");
        assert_eq!(Strategy::DepthFirst.to_string(), "DFS");
    }
}
