//! Session keys, move commands and the move log.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, GameState, MazeId, PlayerId};
use crate::rules::MoveOutcome;

/// Identifies one player's session on one maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionKey {
    pub player: PlayerId,
    pub maze: MazeId,
}

impl SessionKey {
    #[must_use]
    pub const fn new(player: PlayerId, maze: MazeId) -> Self {
        Self { player, maze }
    }
}

impl std::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on {}", self.player, self.maze)
    }
}

/// A raw move submitted against a session.
///
/// `expected_version` is the move counter the client computed the move
/// against. When set and the stored counter has moved on, the move is
/// refused as stale instead of being applied to newer state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCommand {
    pub direction: String,
    pub steps: i64,
    #[serde(default)]
    pub expected_version: Option<u64>,
}

impl MoveCommand {
    /// Create an unversioned command.
    #[must_use]
    pub fn new(direction: impl Into<String>, steps: i64) -> Self {
        Self {
            direction: direction.into(),
            steps,
            expected_version: None,
        }
    }

    /// Require the stored move counter to equal `version`.
    #[must_use]
    pub fn with_expected_version(mut self, version: u64) -> Self {
        self.expected_version = Some(version);
        self
    }
}

/// One entry of a session's move log.
///
/// Every resolved command is logged, valid or not. `move_counter` is the
/// session's counter after the command, so rejected entries repeat the
/// previous value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub direction: String,
    pub steps: i64,
    pub position: Coord,
    pub move_counter: u64,
    pub valid: bool,
    pub steps_achieved: u8,
    pub won: bool,
}

impl MoveRecord {
    pub(crate) fn new(command: &MoveCommand, committed: &GameState, outcome: &MoveOutcome) -> Self {
        Self {
            direction: command.direction.clone(),
            steps: command.steps,
            position: committed.position,
            move_counter: committed.move_count,
            valid: outcome.valid,
            steps_achieved: outcome.steps_achieved,
            won: committed.won,
        }
    }
}

/// Fold an outcome into the stored state.
///
/// A valid outcome replaces the state and advances the move counter by one;
/// an invalid one leaves the state exactly as it was.
#[must_use]
pub fn commit(state: &GameState, outcome: &MoveOutcome) -> GameState {
    if !outcome.valid {
        return state.clone();
    }
    GameState {
        move_count: state.move_count + 1,
        ..outcome.new_state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{BlockReason, MoveEvents, MoveReason};

    #[test]
    fn test_commit_valid_advances_counter() {
        let state = GameState::new(MazeId::new(1), Coord::new(1, 1));
        let mut moved = state.clone();
        moved.position = Coord::new(1, 3);
        let outcome = MoveOutcome {
            valid: true,
            new_state: moved,
            steps_achieved: 2,
            reason: None,
            events: MoveEvents::new(),
        };

        let next = commit(&state, &outcome);
        assert_eq!(next.position, Coord::new(1, 3));
        assert_eq!(next.move_count, 1);
    }

    #[test]
    fn test_commit_blocked_still_counts() {
        let state = GameState::new(MazeId::new(1), Coord::new(1, 1));
        let outcome = MoveOutcome {
            valid: true,
            new_state: state.clone(),
            steps_achieved: 0,
            reason: Some(MoveReason::Blocked(BlockReason::Wall)),
            events: MoveEvents::new(),
        };

        let next = commit(&state, &outcome);
        assert_eq!(next.position, state.position);
        assert_eq!(next.move_count, 1);
    }

    #[test]
    fn test_commit_rejected_is_noop() {
        let state = GameState::new(MazeId::new(1), Coord::new(1, 1));
        let outcome = MoveOutcome::rejected(&state, MoveReason::GameAlreadyWon);
        assert_eq!(commit(&state, &outcome), state);
    }

    #[test]
    fn test_command_json_defaults() {
        let command: MoveCommand =
            serde_json::from_str(r#"{"direction":"up","steps":3}"#).unwrap();
        assert_eq!(command, MoveCommand::new("up", 3));

        let versioned = MoveCommand::new("left", 1).with_expected_version(4);
        assert_eq!(versioned.expected_version, Some(4));
    }

    #[test]
    fn test_key_display() {
        let key = SessionKey::new(PlayerId::new(3), MazeId::new(2));
        assert_eq!(key.to_string(), "Player 3 on Maze(2)");
    }
}
