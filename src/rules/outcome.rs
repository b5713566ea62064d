//! Move outcomes.
//!
//! A resolved move always produces a `MoveOutcome`, never an error.
//! Rejected requests (`valid == false`) carry the input state unchanged.
//! Accepted requests carry the state after every applied unit step, even
//! when a wall or locked door stopped the move early.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Color, Coord, GameState, InputError};

use super::step::BlockReason;

/// Why a move did not run its full step budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveReason {
    /// Malformed request. Rejected before touching the grid.
    InvalidInput(InputError),
    /// The game was already won. Rejected.
    GameAlreadyWon,
    /// Stopped early by a wall, the grid edge or a locked door. Not an error.
    Blocked(BlockReason),
}

impl MoveReason {
    /// Check if this reason rejects the request outright.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        !matches!(self, MoveReason::Blocked(_))
    }
}

impl std::fmt::Display for MoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveReason::InvalidInput(err) => write!(f, "invalid input: {err}"),
            MoveReason::GameAlreadyWon => f.write_str("game already won"),
            MoveReason::Blocked(block) => write!(f, "{block}"),
        }
    }
}

/// Something that happened during a move, in order of occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MoveEvent {
    KeyCollected { color: Color, at: Coord },
    BookCollected { color: Color, at: Coord },
    Teleported { from: Coord, to: Coord },
    Won { at: Coord },
}

/// Events of one move. Most moves produce at most a few.
pub type MoveEvents = SmallVec<[MoveEvent; 4]>;

/// Result of resolving one move request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// True whenever the request was well-formed and the game not yet won.
    pub valid: bool,

    /// State after the move. Equal to the input state when rejected.
    /// The move counter is not advanced here; committing does that.
    pub new_state: GameState,

    /// Unit steps actually applied.
    pub steps_achieved: u8,

    /// Set when the move was rejected or stopped by an obstacle.
    pub reason: Option<MoveReason>,

    /// Pickups, teleports and the win, in order.
    pub events: MoveEvents,
}

impl MoveOutcome {
    /// A rejected request: state unchanged, nothing applied.
    #[must_use]
    pub fn rejected(state: &GameState, reason: MoveReason) -> Self {
        Self {
            valid: false,
            new_state: state.clone(),
            steps_achieved: 0,
            reason: Some(reason),
            events: MoveEvents::new(),
        }
    }

    /// Check if the move was stopped by an obstacle.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        matches!(self.reason, Some(MoveReason::Blocked(_)))
    }

    /// Check if this move produced the win.
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.events.iter().any(|e| matches!(e, MoveEvent::Won { .. }))
    }

    /// Human-readable reason, for the wire `error` field.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.reason.as_ref().map(ToString::to_string)
    }
}
