use thiserror::Error;

use crate::core::MazeId;

use super::record::SessionKey;

/// Errors raised by the session store.
///
/// Rule-level rejections are not errors: they come back as an invalid
/// `MoveOutcome` inside a successful apply.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("stale state: move computed against version {expected}, session is at {actual}")]
    StaleState { expected: u64, actual: u64 },
    #[error("no session for {0}")]
    UnknownSession(SessionKey),
    #[error("session is on {expected} but {actual} was supplied")]
    MazeMismatch { expected: MazeId, actual: MazeId },
}
