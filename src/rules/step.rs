//! The unit-step kernel.
//!
//! Every movement rule lives here: one call advances one cell in one
//! direction, applying blocking, pickups and portal relocation. The move
//! resolver runs it up to the requested step count; the generator's
//! solvability search runs it one step at a time. Sharing the kernel keeps
//! "solvable" and "playable" the same definition.
//!
//! Per unit step:
//! 1. Out of bounds or wall: blocked.
//! 2. Door whose key is not held: blocked.
//! 3. Otherwise enter the cell, then apply its feature:
//!    - key: collected (no-op if already held)
//!    - book: collected only if its key is held (otherwise inert floor)
//!    - portal: relocate once to the linked cell; the landing cell's own
//!      portal link is not followed

use serde::{Deserialize, Serialize};

use crate::core::{Color, ColorSet, Coord, Direction, GameState};
use crate::maze::{Feature, MazeDefinition};

/// Position and collections: the part of a game state that movement changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Progress {
    pub position: Coord,
    pub keys: ColorSet,
    pub books: ColorSet,
}

impl Progress {
    /// Progress at the maze start with nothing collected.
    #[must_use]
    pub fn start(maze: &MazeDefinition) -> Self {
        Self {
            position: maze.start(),
            keys: ColorSet::empty(),
            books: ColorSet::empty(),
        }
    }

    /// Check if every color in `goal` has its book collected.
    #[must_use]
    pub fn has_all_books(&self, goal: ColorSet) -> bool {
        self.books.is_superset(goal)
    }
}

impl From<&GameState> for Progress {
    fn from(state: &GameState) -> Self {
        Self {
            position: state.position,
            keys: state.collected_keys,
            books: state.collected_books,
        }
    }
}

/// Why a unit step could not be taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockReason {
    /// The next cell is outside the grid.
    Boundary,
    /// The next cell is a wall.
    Wall,
    /// The next cell is a door whose key is not held.
    LockedDoor(Color),
}

impl std::fmt::Display for BlockReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockReason::Boundary => f.write_str("hit boundary"),
            BlockReason::Wall => f.write_str("hit wall"),
            BlockReason::LockedDoor(color) => write!(f, "need {color} key to pass"),
        }
    }
}

/// Side effects of a successful unit step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advance {
    /// Cell stepped onto (before any portal relocation).
    pub entered: Coord,
    /// Key newly collected on entry.
    pub key: Option<Color>,
    /// Book newly collected on entry.
    pub book: Option<Color>,
    /// Portal landing cell, if the entered cell relocated.
    pub teleport: Option<Coord>,
}

/// Result of one unit step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitStep {
    Advanced(Advance),
    Blocked(BlockReason),
}

/// Advance `progress` one cell in `direction`.
///
/// On `Blocked`, `progress` is untouched.
pub fn advance(maze: &MazeDefinition, progress: &mut Progress, direction: Direction) -> UnitStep {
    let grid = maze.grid();
    let Some(next) = grid.neighbor(progress.position, direction) else {
        return UnitStep::Blocked(BlockReason::Boundary);
    };
    if !grid.is_floor(next) {
        return UnitStep::Blocked(BlockReason::Wall);
    }

    let feature = maze.feature_at(next);
    if let Some(Feature::Door(color)) = feature {
        if !progress.keys.contains(color) {
            return UnitStep::Blocked(BlockReason::LockedDoor(color));
        }
    }

    progress.position = next;
    let mut advance = Advance {
        entered: next,
        key: None,
        book: None,
        teleport: None,
    };

    // Features are exclusive per cell, so at most one arm applies.
    match feature {
        Some(Feature::Key(color)) => {
            if progress.keys.insert(color) {
                advance.key = Some(color);
            }
        }
        Some(Feature::Book(color)) => {
            if progress.keys.contains(color) && progress.books.insert(color) {
                advance.book = Some(color);
            }
        }
        Some(Feature::Portal { exit }) => {
            progress.position = exit;
            advance.teleport = Some(exit);
        }
        Some(Feature::Door(_) | Feature::Start | Feature::PortalExit) | None => {}
    }

    UnitStep::Advanced(advance)
}
