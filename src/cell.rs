use core::fmt;

pub const EMPTY_GLYPH: char = ' ';
pub const WALL_GLYPH: char = '#';
pub const WATER_GLYPH: char = '~';
pub const START_GLYPH: char = 'S';
pub const END_GLYPH: char = 'E';
pub const PATH_GLYPH: char = '.';

/// The content of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellKind {
    #[default]
    Empty,
    /// Blocks movement.
    Wall,
    /// Traversable, only drawn differently from [CellKind::Empty].
    Water,
    Start,
    End,
    /// Marks a cell on the most recently found path. Cleared by [Grid::reset](crate::Grid::reset).
    PathMark,
}

impl CellKind {
    pub fn glyph(self) -> char {
        match self {
            CellKind::Empty => EMPTY_GLYPH,
            CellKind::Wall => WALL_GLYPH,
            CellKind::Water => WATER_GLYPH,
            CellKind::Start => START_GLYPH,
            CellKind::End => END_GLYPH,
            CellKind::PathMark => PATH_GLYPH,
        }
    }
    pub fn from_glyph(glyph: char) -> Option<CellKind> {
        match glyph {
            EMPTY_GLYPH => Some(CellKind::Empty),
            WALL_GLYPH => Some(CellKind::Wall),
            WATER_GLYPH => Some(CellKind::Water),
            START_GLYPH => Some(CellKind::Start),
            END_GLYPH => Some(CellKind::End),
            PATH_GLYPH => Some(CellKind::PathMark),
            _ => None,
        }
    }
    /// Obstacles are the kinds a user may place and remove.
    pub fn is_obstacle(self) -> bool {
        matches!(self, CellKind::Wall | CellKind::Water)
    }
    /// Start and End are fixed at construction and never overwritten.
    pub fn is_special(self) -> bool {
        matches!(self, CellKind::Start | CellKind::End)
    }
    /// Kinds a search may step onto.
    pub fn is_traversable(self) -> bool {
        matches!(self, CellKind::Empty | CellKind::Water | CellKind::End)
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
