//! Serde shapes for the HTTP boundary.
//!
//! The engine does no networking. These types fix the JSON that the
//! surrounding service exchanges with clients, so the service only has to
//! move them over the wire:
//!
//! - `MoveSubmission` in: `{direction, steps, maze_id}` plus an optional
//!   `version` for optimistic concurrency
//! - `MoveResponse` out: `{valid, new_position, collected_keys,
//!   collected_books, won, error?}`
//! - `MazeListing` out: the maze as rows of one-character strings with
//!   items keyed by color and portals keyed by `"row,col"`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::{Color, Coord, MazeId};
use crate::maze::{MazeDefinition, Placement};
use crate::rules::MoveOutcome;
use crate::session::{Applied, MoveCommand};

/// A move as submitted by a client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSubmission {
    pub direction: String,
    pub steps: i64,
    pub maze_id: MazeId,
    /// Move counter the client last saw.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
}

impl MoveSubmission {
    /// Convert to a session command.
    #[must_use]
    pub fn to_command(&self) -> MoveCommand {
        MoveCommand {
            direction: self.direction.clone(),
            steps: self.steps,
            expected_version: self.version,
        }
    }
}

/// Reply to a move submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    pub valid: bool,
    pub new_position: Coord,
    pub collected_keys: Vec<Color>,
    pub collected_books: Vec<Color>,
    pub won: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MoveResponse {
    /// Build a response from a resolved outcome.
    #[must_use]
    pub fn from_outcome(outcome: &MoveOutcome) -> Self {
        let state = &outcome.new_state;
        Self {
            valid: outcome.valid,
            new_position: state.position,
            collected_keys: state.collected_keys.to_vec(),
            collected_books: state.collected_books.to_vec(),
            won: state.won,
            error: outcome.message(),
        }
    }
}

impl From<&Applied> for MoveResponse {
    fn from(applied: &Applied) -> Self {
        Self::from_outcome(&applied.outcome)
    }
}

/// A maze as listed to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeListing {
    pub maze_id: MazeId,
    pub name: String,
    pub grid: Vec<Vec<String>>,
    pub start_pos: Coord,
    pub keys: BTreeMap<Color, Coord>,
    pub doors: BTreeMap<Color, Coord>,
    pub books: BTreeMap<Color, Coord>,
    /// Every relocating cell, keyed `"row,col"`. Two-way pairs appear in both directions.
    pub portals: BTreeMap<String, Coord>,
}

impl MazeListing {
    #[must_use]
    pub fn from_maze(maze: &MazeDefinition) -> Self {
        let grid = maze
            .grid()
            .to_lines()
            .iter()
            .map(|line| line.chars().map(String::from).collect())
            .collect();

        let mut portals = BTreeMap::new();
        for pair in maze.portals() {
            portals.insert(portal_key(pair.entrance), pair.exit);
            if pair.two_way {
                portals.insert(portal_key(pair.exit), pair.entrance);
            }
        }

        Self {
            maze_id: maze.id(),
            name: maze.name().to_string(),
            grid,
            start_pos: maze.start(),
            keys: by_color(maze.keys()),
            doors: by_color(maze.doors()),
            books: by_color(maze.books()),
            portals,
        }
    }
}

impl From<&MazeDefinition> for MazeListing {
    fn from(maze: &MazeDefinition) -> Self {
        Self::from_maze(maze)
    }
}

fn by_color(placements: &[Placement]) -> BTreeMap<Color, Coord> {
    placements.iter().map(|p| (p.color, p.at)).collect()
}

fn portal_key(at: Coord) -> String {
    format!("{},{}", at.row, at.col)
}
