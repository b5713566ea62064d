//! Per-session game state.
//!
//! One `GameState` exists per (player, maze) session. It is created at the
//! maze start and only ever replaced wholesale by a committed move outcome.
//! Once `won` is set, the state is terminal.

use serde::{Deserialize, Serialize};

use super::color::{Color, ColorSet};
use super::coord::Coord;
use super::ids::MazeId;

/// A player's progress through one maze.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Maze this state belongs to.
    pub maze_id: MazeId,

    /// Current position.
    pub position: Coord,

    /// Colors whose key has been picked up.
    pub collected_keys: ColorSet,

    /// Colors whose book has been collected.
    pub collected_books: ColorSet,

    /// Number of committed moves. Doubles as the optimistic version.
    pub move_count: u64,

    /// Set once every book in the maze is collected.
    pub won: bool,
}

impl GameState {
    /// Fresh state at `start` with nothing collected.
    #[must_use]
    pub fn new(maze_id: MazeId, start: Coord) -> Self {
        Self {
            maze_id,
            position: start,
            collected_keys: ColorSet::empty(),
            collected_books: ColorSet::empty(),
            move_count: 0,
            won: false,
        }
    }

    /// Optimistic concurrency version.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.move_count
    }

    /// Check if the key of `color` has been collected.
    #[must_use]
    pub fn has_key(&self, color: Color) -> bool {
        self.collected_keys.contains(color)
    }

    /// Check if the book of `color` has been collected.
    #[must_use]
    pub fn has_book(&self, color: Color) -> bool {
        self.collected_books.contains(color)
    }
}
