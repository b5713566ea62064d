//! Engine-level entry points.
//!
//! Plain functions for callers that do not need the config builder or the
//! session store: generate a maze, start a game on it, resolve a move.

use crate::core::{GameState, GeneratorConfig};
use crate::generation::{GenerationError, MazeGenerator};
use crate::maze::MazeDefinition;
use crate::rules::{MoveOutcome, MoveResolver, RulesEngine};

/// Generate a solvable maze.
///
/// Identical arguments always produce the identical maze.
///
/// # Example
///
/// ```
/// use rust_maze::generate_maze;
///
/// let maze = generate_maze(11, 11, 7, 3, 1).unwrap();
/// assert_eq!(maze.colors().len(), 3);
/// assert_eq!(maze, generate_maze(11, 11, 7, 3, 1).unwrap());
/// ```
pub fn generate_maze(
    rows: usize,
    cols: usize,
    seed: u64,
    color_count: usize,
    portal_pair_count: usize,
) -> Result<MazeDefinition, GenerationError> {
    let config = GeneratorConfig::new(rows, cols, seed)
        .with_colors(color_count)
        .with_portals(portal_pair_count);
    MazeGenerator::new(config)?.generate()
}

/// Fresh state at the maze start.
#[must_use]
pub fn create_session(maze: &MazeDefinition) -> GameState {
    MoveResolver::new().initial_state(maze)
}

/// Resolve one move with the standard rules. Pure.
#[must_use]
pub fn resolve_move(
    state: &GameState,
    maze: &MazeDefinition,
    direction: &str,
    steps: i64,
) -> MoveOutcome {
    MoveResolver::new().resolve(state, maze, direction, steps)
}
