use thiserror::Error;

use crate::core::{Color, Coord};

use super::definition::ItemKind;

/// Errors raised when maze layout invariants are violated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("grid has no cells")]
    EmptyGrid,
    #[error("grid row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("unknown grid symbol {symbol:?} at {at}")]
    UnknownSymbol { symbol: char, at: Coord },
    #[error("grid {rows}x{cols} is smaller than the {min}x{min} minimum")]
    TooSmall { rows: usize, cols: usize, min: usize },
    #[error("border cell {0} is not a wall")]
    OpenBorder(Coord),
    #[error("{what} at {at} is not on a floor cell")]
    NotFloor { what: String, at: Coord },
    #[error("{first} and {second} both occupy {at}")]
    Overlap {
        at: Coord,
        first: String,
        second: String,
    },
    #[error("duplicate {kind} placement for color {color}")]
    DuplicateColor { kind: ItemKind, color: Color },
    #[error("color {color} has no {kind}")]
    MissingPlacement { kind: ItemKind, color: Color },
    #[error("maze places no colors")]
    NoColors,
    #[error("portal at {0} links to itself")]
    DegeneratePortal(Coord),
    #[error("snapshot decode failed: {0}")]
    Snapshot(String),
}
