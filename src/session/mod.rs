//! Session orchestration.
//!
//! Thin layer between callers and the rules: it owns the per-session
//! `GameState`, serializes moves on a session and commits outcomes.

pub mod record;
pub mod store;
pub mod error;

pub use error::SessionError;
pub use record::{commit, MoveCommand, MoveRecord, SessionKey};
pub use store::{Applied, SessionStore};
