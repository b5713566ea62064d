//! Engine limits and generator configuration.
//!
//! Games configure maze generation via `GeneratorConfig`, usually starting
//! from a `Difficulty` preset. Limits that are part of the rules (step
//! bounds, grid size bounds) are constants.

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// Minimum unit steps in one move request.
pub const MIN_STEPS: u8 = 1;

/// Maximum unit steps in one move request.
pub const MAX_STEPS: u8 = 10;

/// Smallest supported grid dimension (border plus a 3-wide interior).
pub const MIN_DIMENSION: usize = 5;

/// Largest supported grid dimension.
pub const MAX_DIMENSION: usize = 101;

/// Maze size presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 11×11 grid.
    Beginner,
    /// 15×15 grid.
    Intermediate,
    /// 19×19 grid.
    Advanced,
}

impl Difficulty {
    /// All presets, easiest first.
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// Square grid dimension for this preset.
    #[must_use]
    pub const fn dimension(self) -> usize {
        match self {
            Difficulty::Beginner => 11,
            Difficulty::Intermediate => 15,
            Difficulty::Advanced => 19,
        }
    }

    /// Display name for listings.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner Maze",
            Difficulty::Intermediate => "Intermediate Maze",
            Difficulty::Advanced => "Advanced Maze",
        }
    }
}

/// Maze generation parameters.
///
/// Identical configs always generate identical mazes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Grid rows, including the border.
    pub rows: usize,

    /// Grid columns, including the border.
    pub cols: usize,

    /// Sole source of randomness.
    pub seed: u64,

    /// Number of palette colors to place (1-5).
    pub color_count: usize,

    /// Number of portal pairs to place.
    pub portal_pair_count: usize,

    /// Whole-layout retries before giving up.
    pub max_attempts: u32,

    /// Resamples per color within one layout attempt.
    pub placement_attempts: u32,

    /// Fixed start cell. Must have odd row and column.
    /// `None` picks a random start.
    #[serde(default)]
    pub start: Option<Coord>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: 11,
            cols: 11,
            seed: 42,
            color_count: Self::DEFAULT_COLOR_COUNT,
            portal_pair_count: 2,
            max_attempts: 64,
            placement_attempts: 64,
            start: None,
        }
    }
}

impl GeneratorConfig {
    /// Default number of colors: the full palette.
    pub const DEFAULT_COLOR_COUNT: usize = 5;

    /// Create a config with the given dimensions and seed.
    #[must_use]
    pub fn new(rows: usize, cols: usize, seed: u64) -> Self {
        Self {
            rows,
            cols,
            seed,
            ..Self::default()
        }
    }

    /// Create a config from a difficulty preset.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty, seed: u64) -> Self {
        let dim = difficulty.dimension();
        Self::new(dim, dim, seed)
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of colors.
    #[must_use]
    pub fn with_colors(mut self, count: usize) -> Self {
        self.color_count = count;
        self
    }

    /// Set the number of portal pairs.
    #[must_use]
    pub fn with_portals(mut self, pairs: usize) -> Self {
        self.portal_pair_count = pairs;
        self
    }

    /// Set the whole-layout retry bound.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the per-placement resample bound.
    #[must_use]
    pub fn with_placement_attempts(mut self, attempts: u32) -> Self {
        self.placement_attempts = attempts;
        self
    }

    /// Fix the start cell.
    #[must_use]
    pub fn with_start(mut self, start: Coord) -> Self {
        self.start = Some(start);
        self
    }
}
