//! Rules engine trait.
//!
//! The session store calls into a `RulesEngine` and never interprets
//! movement itself. `MoveResolver` is the only production implementation;
//! the seam lets orchestration be tested against scripted rules.

use crate::core::GameState;
use crate::maze::MazeDefinition;

use super::outcome::MoveOutcome;
use super::resolver::MoveResolver;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `resolve_move` must be deterministic and side-effect free
/// - A rejected outcome must carry the input state unchanged
pub trait RulesEngine {
    /// Resolve a raw move against `state`.
    fn resolve_move(
        &self,
        state: &GameState,
        maze: &MazeDefinition,
        direction: &str,
        steps: i64,
    ) -> MoveOutcome;

    /// State for a new session on `maze`.
    fn initial_state(&self, maze: &MazeDefinition) -> GameState {
        GameState::new(maze.id(), maze.start())
    }
}

impl RulesEngine for MoveResolver {
    fn resolve_move(
        &self,
        state: &GameState,
        maze: &MazeDefinition,
        direction: &str,
        steps: i64,
    ) -> MoveOutcome {
        self.resolve(state, maze, direction, steps)
    }
}
