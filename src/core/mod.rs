//! Core engine types: coordinates, moves, colors, state, RNG, configuration.
//!
//! This module contains the vocabulary shared by generation, rules and
//! sessions. Nothing here knows about grids or item placements.

pub mod coord;
pub mod movement;
pub mod color;
pub mod ids;
pub mod rng;
pub mod config;
pub mod state;

pub use coord::Coord;
pub use movement::{Direction, InputError, MoveRequest};
pub use color::{Color, ColorSet};
pub use ids::{MazeId, PlayerId};
pub use rng::MazeRng;
pub use config::{Difficulty, GeneratorConfig, MAX_DIMENSION, MAX_STEPS, MIN_DIMENSION, MIN_STEPS};
pub use state::GameState;
