//! Gameplay rules: unit steps, move resolution, outcomes.
//!
//! Everything that decides where a player ends up and what they collect
//! lives here. Sessions call into `RulesEngine`; generation calls the
//! step kernel directly for its solvability search.

pub mod step;
pub mod outcome;
pub mod resolver;
pub mod engine;

pub use step::{advance, Advance, BlockReason, Progress, UnitStep};
pub use outcome::{MoveEvent, MoveEvents, MoveOutcome, MoveReason};
pub use resolver::MoveResolver;
pub use engine::RulesEngine;
