use thiserror::Error;

use crate::MIN_DIMENSION;

/// Errors surfaced by grid construction and by the interactive session.
///
/// Out-of-bounds edits and unreachable goals are not errors: they come back as
/// `false` and `None` respectively.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("grid must be at least {min}x{min}, got {rows}x{cols}", min = MIN_DIMENSION)]
    InvalidSize { rows: i32, cols: i32 },

    #[error("not a valid number: {0:?}")]
    ParseError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
