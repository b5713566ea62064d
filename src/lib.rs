//! # rust-maze
//!
//! A deterministic rules engine for a key, door and book maze puzzle.
//!
//! ## Design Principles
//!
//! 1. **Solvable by Construction**: Generated mazes are searched before they
//!    are returned. A layout that cannot be won is retried, never returned.
//!
//! 2. **Pure Rules**: Move resolution is a function of (state, maze, move).
//!    No hidden state, no I/O, no clock.
//!
//! 3. **One Movement Kernel**: The resolver and the solvability search step
//!    through the same unit-step function, so "solvable" means "playable".
//!
//! ## Architecture
//!
//! - **Immutable Mazes**: `MazeDefinition` is validated once (no overlapping
//!   features, closed border, complete color sets) and never mutated.
//!
//! - **Best-Effort Moves**: A move applies as many unit steps as it can and
//!   reports how far it got. Only malformed input or a finished game is
//!   rejected.
//!
//! - **Serialized Sessions**: `SessionStore` locks per session and checks the
//!   move counter as an optimistic version.
//!
//! ## Modules
//!
//! - `core`: Coordinates, directions, colors, RNG, configuration, game state
//! - `maze`: Grids, validated maze definitions, builder
//! - `generation`: Prim carving, placement, search, generator, catalog
//! - `rules`: Unit-step kernel, move resolver, outcomes
//! - `session`: Per-session state and move log
//! - `wire`: JSON shapes for the HTTP boundary
//! - `engine`: Free-function entry points

pub mod core;
pub mod maze;
pub mod generation;
pub mod rules;
pub mod session;
pub mod wire;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Coord, Direction, MoveRequest, InputError,
    Color, ColorSet, MazeId, PlayerId,
    MazeRng, Difficulty, GeneratorConfig,
    MIN_STEPS, MAX_STEPS,
    GameState,
};

pub use crate::maze::{Cell, Grid, MazeDefinition, MazeLayout, MazeBuilder, MazeError, PortalPair};

pub use crate::generation::{MazeGenerator, MazeCatalog, GenerationError, SearchReport};

pub use crate::rules::{MoveResolver, MoveOutcome, MoveReason, MoveEvent, BlockReason, RulesEngine};

pub use crate::session::{SessionStore, SessionKey, MoveCommand, MoveRecord, SessionError, Applied};

pub use crate::wire::{MoveSubmission, MoveResponse, MazeListing};

pub use crate::engine::{generate_maze, create_session, resolve_move};
