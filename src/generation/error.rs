use thiserror::Error;

use crate::core::Coord;
use crate::maze::MazeError;

/// Errors raised by maze generation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("grid {rows}x{cols} outside supported range {min}..={max}")]
    DimensionsOutOfRange {
        rows: usize,
        cols: usize,
        min: usize,
        max: usize,
    },
    #[error("color count {count} outside 1..={max}")]
    ColorCountOutOfRange { count: usize, max: usize },
    #[error("{field} must be at least 1")]
    ZeroAttempts { field: &'static str },
    #[error("fixed start {0} is not an interior cell with odd row and column")]
    InvalidStart(Coord),
    #[error("no solvable layout found after {attempts} attempts")]
    UnsolvableConfiguration { attempts: u32 },
    #[error("generated layout violated maze invariants: {0}")]
    Layout(#[from] MazeError),
}

impl GenerationError {
    /// Check if the configuration was rejected before any attempt ran.
    #[must_use]
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            GenerationError::DimensionsOutOfRange { .. }
                | GenerationError::ColorCountOutOfRange { .. }
                | GenerationError::ZeroAttempts { .. }
                | GenerationError::InvalidStart(_)
        )
    }
}
