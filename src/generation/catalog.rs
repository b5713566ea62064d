//! Named maze presets.
//!
//! The standard catalog holds one maze per `Difficulty`, generated from a
//! fixed seed with the start pinned to the top-left interior cell. Ids run
//! from 1 in difficulty order.

use crate::core::{Coord, Difficulty, GeneratorConfig, MazeId};
use crate::maze::MazeDefinition;

use super::error::GenerationError;
use super::generator::MazeGenerator;

/// Seed used for every standard catalog entry.
pub const CATALOG_SEED: u64 = 42;

/// An ordered set of mazes addressable by id.
#[derive(Clone, Debug, Default)]
pub struct MazeCatalog {
    mazes: Vec<MazeDefinition>,
}

impl MazeCatalog {
    /// Create a catalog from existing mazes. Later duplicates of an id are dropped.
    #[must_use]
    pub fn new(mazes: impl IntoIterator<Item = MazeDefinition>) -> Self {
        let mut catalog = Self::default();
        for maze in mazes {
            catalog.insert(maze);
        }
        catalog
    }

    /// The three difficulty presets.
    pub fn standard() -> Result<Self, GenerationError> {
        let mut catalog = Self::default();
        for (id, difficulty) in (1..).zip(Difficulty::ALL) {
            let config = GeneratorConfig::for_difficulty(difficulty, CATALOG_SEED)
                .with_start(Coord::new(1, 1));
            let maze = MazeGenerator::new(config)?
                .generate_as(MazeId::new(id), difficulty.display_name())?;
            catalog.insert(maze);
        }
        Ok(catalog)
    }

    /// Add a maze. Returns false if its id is already taken.
    pub fn insert(&mut self, maze: MazeDefinition) -> bool {
        if self.get(maze.id()).is_some() {
            return false;
        }
        self.mazes.push(maze);
        true
    }

    #[must_use]
    pub fn get(&self, id: MazeId) -> Option<&MazeDefinition> {
        self.mazes.iter().find(|m| m.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MazeDefinition> {
        self.mazes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mazes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mazes.is_empty()
    }
}
