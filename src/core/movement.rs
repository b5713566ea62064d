//! Move requests: direction plus step count.
//!
//! Raw requests arrive as a direction string and an integer step count.
//! `MoveRequest` is the validated form: once constructed, its direction is
//! one of the four cardinal directions and its step count is within
//! `MIN_STEPS..=MAX_STEPS`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::{MAX_STEPS, MIN_STEPS};
use super::ids::MazeId;

/// Cardinal movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row/column delta for one unit step.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Wire name of the direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(InputError::UnknownDirection(other.to_string())),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Malformed move input, rejected before any grid interaction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invalid direction {0:?}")]
    UnknownDirection(String),
    #[error("step count {steps} outside {min}..={max}")]
    StepsOutOfRange { steps: i64, min: u8, max: u8 },
    #[error("state belongs to maze {state} but maze {maze} was supplied")]
    MazeMismatch { state: MazeId, maze: MazeId },
}

/// A validated move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    direction: Direction,
    steps: u8,
}

impl MoveRequest {
    /// Create a request, validating the step count.
    pub fn new(direction: Direction, steps: i64) -> Result<Self, InputError> {
        if !(i64::from(MIN_STEPS)..=i64::from(MAX_STEPS)).contains(&steps) {
            return Err(InputError::StepsOutOfRange {
                steps,
                min: MIN_STEPS,
                max: MAX_STEPS,
            });
        }
        Ok(Self {
            direction,
            steps: steps as u8,
        })
    }

    /// Parse a raw wire request.
    ///
    /// The direction is checked before the step count.
    pub fn parse(direction: &str, steps: i64) -> Result<Self, InputError> {
        Self::new(direction.parse()?, steps)
    }

    /// Requested direction.
    #[must_use]
    pub const fn direction(self) -> Direction {
        self.direction
    }

    /// Requested number of unit steps.
    #[must_use]
    pub const fn steps(self) -> u8 {
        self.steps
    }
}
