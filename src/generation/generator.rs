//! Maze generator.
//!
//! Each attempt carves a fresh grid, places the start, items and portals,
//! then runs the state-space search. Attempts that fail placement, are not
//! solvable or leave a floor cell unreachable are discarded. Every attempt
//! draws from its own fork of the seeded root stream, so the result depends
//! on the config alone.

use rustc_hash::FxHashSet;

use crate::core::{
    Color, ColorSet, GeneratorConfig, MazeId, MazeRng, MAX_DIMENSION, MIN_DIMENSION,
};
use crate::maze::{MazeDefinition, MazeLayout};

use super::carve::{carve, is_lattice_cell};
use super::error::GenerationError;
use super::placement::{pick_start, place_items, place_portals};
use super::search::explore;

/// Why a single attempt was discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rejection {
    NoStart,
    ItemsDidNotFit,
    PortalsDidNotFit,
    Unsolvable,
    Disconnected(usize),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::NoStart => f.write_str("no start candidate"),
            Rejection::ItemsDidNotFit => f.write_str("items did not fit"),
            Rejection::PortalsDidNotFit => f.write_str("portals did not fit"),
            Rejection::Unsolvable => f.write_str("not solvable"),
            Rejection::Disconnected(n) => write!(f, "{n} floor cells unreachable"),
        }
    }
}

/// Generates validated, solvable mazes from a `GeneratorConfig`.
#[derive(Clone, Debug)]
pub struct MazeGenerator {
    config: GeneratorConfig,
}

impl MazeGenerator {
    /// Create a generator after validating `config`.
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerationError> {
        validate(&config)?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a maze with the default id and a size-derived name.
    pub fn generate(&self) -> Result<MazeDefinition, GenerationError> {
        let name = format!("{}x{} Maze", self.config.rows, self.config.cols);
        self.generate_as(MazeId::default(), name)
    }

    /// Generate a maze with the given identity.
    pub fn generate_as(
        &self,
        id: MazeId,
        name: impl Into<String>,
    ) -> Result<MazeDefinition, GenerationError> {
        let name = name.into();
        let mut root = MazeRng::new(self.config.seed);

        for attempt in 1..=self.config.max_attempts {
            let attempt_rng = root.fork();
            match self.attempt(&attempt_rng, id, &name)? {
                Ok(maze) => {
                    log::debug!(
                        "generated {} ({}x{}, seed {}) on attempt {}",
                        maze.id(),
                        self.config.rows,
                        self.config.cols,
                        self.config.seed,
                        attempt
                    );
                    return Ok(maze);
                }
                Err(rejection) => {
                    log::debug!("maze attempt {attempt} rejected: {rejection}");
                }
            }
        }

        log::warn!(
            "no solvable {}x{} maze with {} colors and {} portal pairs for seed {} after {} attempts",
            self.config.rows,
            self.config.cols,
            self.config.color_count,
            self.config.portal_pair_count,
            self.config.seed,
            self.config.max_attempts
        );
        Err(GenerationError::UnsolvableConfiguration {
            attempts: self.config.max_attempts,
        })
    }

    /// One full layout attempt.
    ///
    /// The outer `Result` carries invariant violations, which indicate a
    /// placement bug rather than bad luck.
    fn attempt(
        &self,
        rng: &MazeRng,
        id: MazeId,
        name: &str,
    ) -> Result<Result<MazeDefinition, Rejection>, GenerationError> {
        let config = &self.config;
        let mut carve_rng = rng.for_context("carve");
        let mut items_rng = rng.for_context("items");
        let mut portals_rng = rng.for_context("portals");

        let grid = carve(config.rows, config.cols, config.start, &mut carve_rng);
        let start = match config.start {
            Some(start) => start,
            None => match pick_start(&grid, &mut items_rng) {
                Some(start) => start,
                None => return Ok(Err(Rejection::NoStart)),
            },
        };

        let mut occupied = FxHashSet::default();
        occupied.insert(start);

        let colors = ColorSet::first(config.color_count);
        let Some(items) = place_items(
            &grid,
            start,
            colors,
            &mut items_rng,
            config.placement_attempts,
            &mut occupied,
        ) else {
            return Ok(Err(Rejection::ItemsDidNotFit));
        };

        let Some(portals) =
            place_portals(&grid, config.portal_pair_count, &mut portals_rng, &mut occupied)
        else {
            return Ok(Err(Rejection::PortalsDidNotFit));
        };

        let maze = MazeDefinition::from_layout(MazeLayout {
            id,
            name: name.to_string(),
            grid,
            start,
            keys: items.keys,
            doors: items.doors,
            books: items.books,
            portals,
        })?;

        let report = explore(&maze);
        if !report.solvable {
            return Ok(Err(Rejection::Unsolvable));
        }
        let unreachable = report.unreachable_floor(&maze);
        if !unreachable.is_empty() {
            return Ok(Err(Rejection::Disconnected(unreachable.len())));
        }

        Ok(Ok(maze))
    }
}

fn validate(config: &GeneratorConfig) -> Result<(), GenerationError> {
    let in_range = |n: usize| (MIN_DIMENSION..=MAX_DIMENSION).contains(&n);
    if !in_range(config.rows) || !in_range(config.cols) {
        return Err(GenerationError::DimensionsOutOfRange {
            rows: config.rows,
            cols: config.cols,
            min: MIN_DIMENSION,
            max: MAX_DIMENSION,
        });
    }
    if config.color_count == 0 || config.color_count > Color::PALETTE.len() {
        return Err(GenerationError::ColorCountOutOfRange {
            count: config.color_count,
            max: Color::PALETTE.len(),
        });
    }
    if config.max_attempts == 0 {
        return Err(GenerationError::ZeroAttempts {
            field: "max_attempts",
        });
    }
    if config.placement_attempts == 0 {
        return Err(GenerationError::ZeroAttempts {
            field: "placement_attempts",
        });
    }
    if let Some(start) = config.start {
        if !is_lattice_cell(config.rows, config.cols, start) {
            return Err(GenerationError::InvalidStart(start));
        }
    }
    Ok(())
}
