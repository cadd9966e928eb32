use crate::cell::CellKind;
use crate::error::MazeError;
use crate::{MIN_DIMENSION, NEIGHBOUR_ORDER};
use core::fmt;
use fxhash::FxHashMap;
use grid_util::Point;
use itertools::Itertools;
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [Grid] is the occupancy matrix of a maze. The start cell is fixed at `(0, 0)` and the end
/// cell at `(rows - 1, cols - 1)`; both keep their kind for the lifetime of the grid.
///
/// Points use `x` for the column and `y` for the row. Operations called from the
/// presentation layer take `(row, col)` in that order.
///
/// In addition to the cells, connected components of passable cells are maintained in a
/// [UnionFind] structure so that unreachable goals can be rejected without a search.
///
/// A path mark covers whatever lay beneath it; the covered kind is kept aside and put back by
/// [reset](Grid::reset), so water crossed by a path survives a solve.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellKind>,
    covered: FxHashMap<usize, CellKind>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Grid {
    /// Creates an all-empty grid with the start and end cells in opposite corners.
    pub fn new(rows: i32, cols: i32) -> Result<Grid, MazeError> {
        if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
            return Err(MazeError::InvalidSize { rows, cols });
        }
        let (rows, cols) = (rows as usize, cols as usize);
        let mut grid = Grid {
            rows,
            cols,
            cells: vec![CellKind::Empty; rows * cols],
            covered: FxHashMap::default(),
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        let (start, end) = (grid.start(), grid.end());
        let start_ix = grid.get_ix_point(&start);
        let end_ix = grid.get_ix_point(&end);
        grid.cells[start_ix] = CellKind::Start;
        grid.cells[end_ix] = CellKind::End;
        grid.generate_components();
        Ok(grid)
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn start(&self) -> Point {
        Point::new(0, 0)
    }
    pub fn end(&self) -> Point {
        Point::new(self.cols as i32 - 1, self.rows as i32 - 1)
    }
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }
    pub fn point_in_bounds(&self, point: &Point) -> bool {
        self.in_bounds(point.y, point.x)
    }
    /// Row-major index of an in-bounds point.
    fn get_ix_point(&self, point: &Point) -> usize {
        point.y as usize * self.cols + point.x as usize
    }
    pub fn get(&self, row: i32, col: i32) -> Option<CellKind> {
        self.get_point(&Point::new(col, row))
    }
    pub fn get_point(&self, point: &Point) -> Option<CellKind> {
        if self.point_in_bounds(point) {
            Some(self.cells[self.get_ix_point(point)])
        } else {
            None
        }
    }
    /// Places a [CellKind::Wall] or [CellKind::Water] obstacle. Returns false without touching
    /// the grid if the position is out of bounds, holds the start or end cell, or `kind` is
    /// not an obstacle.
    pub fn place_obstacle(&mut self, row: i32, col: i32, kind: CellKind) -> bool {
        if !kind.is_obstacle() {
            return false;
        }
        match self.get(row, col) {
            Some(current) if !current.is_special() => {
                debug!("Placing {:?} at ({}, {})", kind, row, col);
                let point = Point::new(col, row);
                let ix = self.get_ix_point(&point);
                self.covered.remove(&ix);
                self.set(point, kind);
                true
            }
            _ => false,
        }
    }
    /// Clears a wall or water cell back to empty. Returns false if there is no obstacle at
    /// the position.
    pub fn remove_obstacle(&mut self, row: i32, col: i32) -> bool {
        match self.get(row, col) {
            Some(current) if current.is_obstacle() => {
                debug!("Removing {:?} at ({}, {})", current, row, col);
                self.set(Point::new(col, row), CellKind::Empty);
                true
            }
            _ => false,
        }
    }
    /// Whether a search may step onto the cell. The start cell is only ever the origin of a
    /// search and is not traversable.
    pub fn is_traversable(&self, row: i32, col: i32) -> bool {
        self.is_traversable_point(&Point::new(col, row))
    }
    pub fn is_traversable_point(&self, point: &Point) -> bool {
        self.get_point(point).is_some_and(CellKind::is_traversable)
    }
    /// Cells that belong to a connected component: everything a search can enter, plus the
    /// start cell it leaves from.
    pub fn is_passable(&self, point: &Point) -> bool {
        self.get_point(point)
            .is_some_and(|kind| kind == CellKind::Start || kind.is_traversable())
    }
    /// Clears every path mark, restoring the kind it covered. Obstacles and the start and end
    /// cells are left as they are.
    pub fn reset(&mut self) {
        for ix in 0..self.cells.len() {
            if self.cells[ix] == CellKind::PathMark {
                let point = Point::new((ix % self.cols) as i32, (ix / self.cols) as i32);
                let kind = self.covered.remove(&ix).unwrap_or(CellKind::Empty);
                self.set(point, kind);
            }
        }
        self.covered.clear();
    }
    /// Marks each point of the path, skipping the start and end cells as well as points
    /// outside the grid.
    pub fn mark_path(&mut self, path: &[Point]) {
        for point in path {
            match self.get_point(point) {
                Some(CellKind::PathMark) => {}
                Some(kind) if !kind.is_special() => {
                    let ix = self.get_ix_point(point);
                    self.covered.insert(ix, kind);
                    self.set(*point, CellKind::PathMark);
                }
                _ => {}
            }
        }
    }
    /// The four axis-aligned neighbours in search order: up, down, left, right. Points outside
    /// the grid are included.
    pub fn neighborhood_points(&self, point: &Point) -> SmallVec<[Point; 4]> {
        NEIGHBOUR_ORDER
            .iter()
            .map(|(d_row, d_col)| Point::new(point.x + d_col, point.y + d_row))
            .collect()
    }
    /// Updates a cell. Joins newly connected components and flags the components as dirty if
    /// they are (potentially) broken apart into multiple.
    fn set(&mut self, point: Point, kind: CellKind) {
        let was_passable = self.is_passable(&point);
        let ix = self.get_ix_point(&point);
        self.cells[ix] = kind;
        if self.is_passable(&point) {
            for n in self.neighborhood_points(&point) {
                if self.is_passable(&n) {
                    let n_ix = self.get_ix_point(&n);
                    self.components.union(ix, n_ix);
                }
            }
        } else if was_passable {
            self.components_dirty = true;
        }
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }
    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }
    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.is_passable(start) && self.is_passable(goal) {
            !self
                .components
                .equiv(self.get_ix_point(start), self.get_ix_point(goal))
        } else {
            true
        }
    }
    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up passable neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.rows * self.cols);
        self.components_dirty = false;
        for y in 0..self.rows as i32 {
            for x in 0..self.cols as i32 {
                let point = Point::new(x, y);
                if !self.is_passable(&point) {
                    continue;
                }
                let parent_ix = self.get_ix_point(&point);
                for n in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.is_passable(&n) {
                        let ix = self.get_ix_point(&n);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for Grid {
    /// Column indices as a header, then one line per row prefixed by its index.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "   {}",
            (0..self.cols).map(|col| format!("{:<3}", col)).join("")
        )?;
        for (row, cells) in self.cells.chunks(self.cols).enumerate() {
            writeln!(
                f,
                "{:<3}{}",
                row,
                cells.iter().map(|cell| format!("{}  ", cell)).join("")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point_at;

    #[test]
    fn fresh_grid_has_start_end_and_empty_cells() {
        for (rows, cols) in [(2, 2), (3, 5), (7, 4)] {
            let grid = Grid::new(rows, cols).unwrap();
            for row in 0..rows {
                for col in 0..cols {
                    let expected = if (row, col) == (0, 0) {
                        CellKind::Start
                    } else if (row, col) == (rows - 1, cols - 1) {
                        CellKind::End
                    } else {
                        CellKind::Empty
                    };
                    assert_eq!(grid.get(row, col), Some(expected));
                }
            }
            assert_eq!(grid.end(), point_at(rows - 1, cols - 1));
        }
    }

    #[test]
    fn too_small_grid_is_rejected() {
        for (rows, cols) in [(1, 5), (5, 1), (0, 0), (-3, 4)] {
            assert!(matches!(
                Grid::new(rows, cols),
                Err(MazeError::InvalidSize { .. })
            ));
        }
    }

    #[test]
    fn obstacles_never_replace_start_or_end() {
        let mut grid = Grid::new(3, 3).unwrap();
        let before = grid.to_string();
        assert!(!grid.place_obstacle(0, 0, CellKind::Wall));
        assert!(!grid.place_obstacle(2, 2, CellKind::Water));
        assert!(!grid.remove_obstacle(0, 0));
        assert!(!grid.remove_obstacle(2, 2));
        assert_eq!(grid.to_string(), before);
    }

    #[test]
    fn out_of_bounds_edits_are_rejected() {
        let mut grid = Grid::new(3, 4).unwrap();
        assert!(!grid.place_obstacle(3, 0, CellKind::Wall));
        assert!(!grid.place_obstacle(0, 4, CellKind::Wall));
        assert!(!grid.place_obstacle(-1, 1, CellKind::Wall));
        assert!(!grid.remove_obstacle(1, -1));
        assert!(!grid.is_traversable(-1, 0));
        assert!(!grid.is_traversable(0, 4));
    }

    #[test]
    fn only_obstacles_can_be_placed_and_removed() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert!(!grid.place_obstacle(1, 1, CellKind::PathMark));
        assert!(!grid.place_obstacle(1, 1, CellKind::Start));
        assert!(!grid.remove_obstacle(1, 1));
        assert!(grid.place_obstacle(1, 1, CellKind::Wall));
        assert!(grid.place_obstacle(1, 1, CellKind::Water));
        assert_eq!(grid.get(1, 1), Some(CellKind::Water));
        assert!(grid.remove_obstacle(1, 1));
        assert_eq!(grid.get(1, 1), Some(CellKind::Empty));
    }

    #[test]
    fn traversable_kinds() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.place_obstacle(0, 1, CellKind::Wall);
        grid.place_obstacle(1, 0, CellKind::Water);
        assert!(!grid.is_traversable(0, 0));
        assert!(!grid.is_traversable(0, 1));
        assert!(grid.is_traversable(1, 0));
        assert!(grid.is_traversable(1, 1));
        assert!(grid.is_traversable(2, 2));
    }

    #[test]
    fn reset_clears_marks_and_keeps_obstacles() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.place_obstacle(0, 1, CellKind::Wall);
        grid.place_obstacle(1, 1, CellKind::Water);
        let before = grid.to_string();
        grid.mark_path(&[
            point_at(0, 0),
            point_at(1, 0),
            point_at(2, 0),
            point_at(2, 1),
            point_at(2, 2),
        ]);
        assert_eq!(grid.get(0, 0), Some(CellKind::Start));
        assert_eq!(grid.get(1, 0), Some(CellKind::PathMark));
        assert_eq!(grid.get(2, 2), Some(CellKind::End));
        grid.reset();
        assert_eq!(grid.to_string(), before);
        grid.reset();
        assert_eq!(grid.to_string(), before);
        assert_eq!(grid.get(0, 1), Some(CellKind::Wall));
        assert_eq!(grid.get(1, 1), Some(CellKind::Water));
    }

    /// Water on the marked path comes back after a reset.
    #[test]
    fn water_survives_mark_and_reset() {
        //  ___
        // |S  |
        // |~#~|
        // |  E|
        //  ___
        let mut grid = Grid::new(3, 3).unwrap();
        grid.place_obstacle(1, 0, CellKind::Water);
        grid.place_obstacle(1, 1, CellKind::Wall);
        grid.place_obstacle(1, 2, CellKind::Water);
        let before = grid.to_string();
        grid.mark_path(&[
            point_at(0, 0),
            point_at(1, 0),
            point_at(2, 0),
            point_at(2, 1),
            point_at(2, 2),
        ]);
        assert_eq!(grid.get(1, 0), Some(CellKind::PathMark));
        assert!(!grid.is_traversable(1, 0));
        grid.reset();
        assert_eq!(grid.get(1, 0), Some(CellKind::Water));
        assert_eq!(grid.get(2, 0), Some(CellKind::Empty));
        assert_eq!(grid.to_string(), before);
        assert!(grid.is_traversable(1, 0));
    }

    /// Marking the same cell twice still restores what lay beneath the first mark.
    #[test]
    fn repeated_marks_keep_the_covered_kind() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.place_obstacle(0, 1, CellKind::Water);
        grid.mark_path(&[point_at(0, 1)]);
        grid.mark_path(&[point_at(0, 1)]);
        grid.reset();
        assert_eq!(grid.get(0, 1), Some(CellKind::Water));
    }

    /// An obstacle placed over a path mark replaces it for good.
    #[test]
    fn obstacle_over_mark_is_kept_by_reset() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.place_obstacle(0, 1, CellKind::Water);
        grid.mark_path(&[point_at(0, 1)]);
        assert!(grid.place_obstacle(0, 1, CellKind::Wall));
        grid.reset();
        assert_eq!(grid.get(0, 1), Some(CellKind::Wall));
    }

    /// Asserts that walls split the components and removing them joins them again.
    #[test]
    fn component_tracking() {
        //  ___
        // |S#|
        // |#E|
        //  __
        let mut grid = Grid::new(2, 2).unwrap();
        let (start, end) = (grid.start(), grid.end());
        assert!(grid.reachable(&start, &end));
        grid.place_obstacle(0, 1, CellKind::Wall);
        grid.place_obstacle(1, 0, CellKind::Wall);
        assert!(grid.components_dirty);
        grid.update();
        assert!(!grid.components_dirty);
        assert!(grid.unreachable(&start, &end));
        grid.remove_obstacle(1, 0);
        assert!(!grid.components_dirty);
        assert!(grid.reachable(&start, &end));
        assert_eq!(grid.get_component(&start), grid.get_component(&end));
    }

    #[test]
    fn display_matches_console_layout() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.place_obstacle(0, 1, CellKind::Wall);
        grid.place_obstacle(1, 0, CellKind::Water);
        let expected = "   0  1  2  \n0  S  #     \n1  ~     E  \n";
        assert_eq!(grid.to_string(), expected);
    }
}
