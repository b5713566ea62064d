//! Maze grids and validated maze definitions.
//!
//! A `MazeDefinition` is immutable once built. It is consumed by the move
//! rules and by whatever renders the maze; neither ever mutates it.

pub mod grid;
pub mod definition;
pub mod builder;
pub mod error;

pub use grid::{Cell, Grid};
pub use definition::{Feature, ItemKind, MazeDefinition, MazeLayout, Placement, PortalPair};
pub use builder::MazeBuilder;
pub use error::MazeError;
