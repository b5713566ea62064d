//! Procedural maze generation.
//!
//! ## Pipeline
//!
//! 1. `carve`: randomized Prim's over the odd-coordinate lattice
//! 2. `placement`: start, then key/door/book per color, then portal pairs
//! 3. `search`: breadth-first search over position and collections
//! 4. `generator`: retries until a layout is solvable and fully connected
//!
//! `MazeCatalog` wraps the generator with the fixed difficulty presets.

pub mod carve;
pub mod placement;
pub mod search;
pub mod generator;
pub mod catalog;
pub mod error;

pub use catalog::{MazeCatalog, CATALOG_SEED};
pub use error::GenerationError;
pub use generator::MazeGenerator;
pub use search::{explore, is_solvable, SearchReport};
