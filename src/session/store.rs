//! In-memory session store.
//!
//! Holds one `GameState` and move log per `SessionKey`. Each session sits
//! behind its own mutex, held for the whole read-resolve-write of a move,
//! so moves on one session are serialized while different sessions never
//! contend beyond the brief map lookup. On top of that, a command may carry
//! the move counter it was computed against; a mismatch is refused as
//! `StaleState`.
//!
//! The store never interprets movement. It asks its `RulesEngine` for an
//! outcome and commits it.

use im::Vector;
use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use std::sync::Arc;

use crate::core::{GameState, PlayerId};
use crate::maze::MazeDefinition;
use crate::rules::{MoveOutcome, MoveResolver, RulesEngine};

use super::error::SessionError;
use super::record::{commit, MoveCommand, MoveRecord, SessionKey};

#[derive(Clone, Debug)]
struct SessionSlot {
    state: GameState,
    history: Vector<MoveRecord>,
}

impl SessionSlot {
    fn fresh(state: GameState) -> Self {
        Self {
            state,
            history: Vector::new(),
        }
    }
}

/// Result of applying a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Applied {
    /// Stored state after the command.
    pub state: GameState,
    /// What the rules decided.
    pub outcome: MoveOutcome,
    /// The log entry appended for this command.
    pub record: MoveRecord,
}

/// Sessions keyed by (player, maze).
pub struct SessionStore<R: RulesEngine = MoveResolver> {
    rules: R,
    sessions: RwLock<FxHashMap<SessionKey, Arc<Mutex<SessionSlot>>>>,
}

impl SessionStore<MoveResolver> {
    /// Create an empty store using the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(MoveResolver::new())
    }
}

impl Default for SessionStore<MoveResolver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RulesEngine> SessionStore<R> {
    /// Create an empty store with custom rules.
    pub fn with_rules(rules: R) -> Self {
        Self {
            rules,
            sessions: RwLock::new(FxHashMap::default()),
        }
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    // === Lifecycle ===

    /// Start a fresh session, replacing any existing one for the same key.
    pub fn create(&self, player: PlayerId, maze: &MazeDefinition) -> GameState {
        let key = SessionKey::new(player, maze.id());
        let state = self.rules.initial_state(maze);
        let replaced = self
            .sessions
            .write()
            .insert(key, Arc::new(Mutex::new(SessionSlot::fresh(state.clone()))));
        if replaced.is_some() {
            log::debug!("replaced session {key}");
        } else {
            log::debug!("created session {key}");
        }
        state
    }

    /// Current state of the session, creating it if absent.
    pub fn get_or_create(&self, player: PlayerId, maze: &MazeDefinition) -> GameState {
        let key = SessionKey::new(player, maze.id());
        if let Some(state) = self.state(key) {
            return state;
        }
        let slot = Arc::clone(self.sessions.write().entry(key).or_insert_with(|| {
            log::debug!("created session {key}");
            Arc::new(Mutex::new(SessionSlot::fresh(self.rules.initial_state(maze))))
        }));
        let state = slot.lock().state.clone();
        state
    }

    /// Put an existing session back at the maze start and clear its log.
    pub fn reset(&self, key: SessionKey, maze: &MazeDefinition) -> Result<GameState, SessionError> {
        check_maze(key, maze)?;
        let slot = self.slot(key)?;
        let mut slot = slot.lock();
        *slot = SessionSlot::fresh(self.rules.initial_state(maze));
        log::debug!("reset session {key}");
        Ok(slot.state.clone())
    }

    /// Drop a session, returning its last state.
    pub fn remove(&self, key: SessionKey) -> Option<GameState> {
        let slot = self.sessions.write().remove(&key)?;
        let state = slot.lock().state.clone();
        Some(state)
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self, key: SessionKey) -> Option<GameState> {
        let slot = self.slot(key).ok()?;
        let state = slot.lock().state.clone();
        Some(state)
    }

    /// Current move counter, the optimistic version clients echo back.
    #[must_use]
    pub fn version(&self, key: SessionKey) -> Option<u64> {
        self.state(key).map(|s| s.version())
    }

    /// Snapshot of the move log, oldest first.
    #[must_use]
    pub fn history(&self, key: SessionKey) -> Option<Vector<MoveRecord>> {
        let slot = self.slot(key).ok()?;
        let history = slot.lock().history.clone();
        Some(history)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    // === Moves ===

    /// Resolve and commit one command.
    ///
    /// Rule rejections (bad input, game already won) still succeed: the
    /// outcome is invalid, the state is untouched, and the command is
    /// logged. Only store-level problems are errors.
    pub fn apply(
        &self,
        key: SessionKey,
        maze: &MazeDefinition,
        command: &MoveCommand,
    ) -> Result<Applied, SessionError> {
        check_maze(key, maze)?;
        let slot = self.slot(key)?;
        let mut slot = slot.lock();

        if let Some(expected) = command.expected_version {
            let actual = slot.state.version();
            if expected != actual {
                log::debug!("stale move on {key}: expected version {expected}, at {actual}");
                return Err(SessionError::StaleState { expected, actual });
            }
        }

        let outcome =
            self.rules
                .resolve_move(&slot.state, maze, &command.direction, command.steps);
        let state = commit(&slot.state, &outcome);
        let record = MoveRecord::new(command, &state, &outcome);

        slot.state = state.clone();
        slot.history.push_back(record.clone());

        if outcome.valid {
            log::debug!(
                "{key} moved {} x{} to {} (version {})",
                command.direction,
                outcome.steps_achieved,
                state.position,
                state.version()
            );
        }
        if outcome.is_winning() {
            log::info!("{key} won after {} moves", state.move_count);
        }

        Ok(Applied {
            state,
            outcome,
            record,
        })
    }

    fn slot(&self, key: SessionKey) -> Result<Arc<Mutex<SessionSlot>>, SessionError> {
        self.sessions
            .read()
            .get(&key)
            .cloned()
            .ok_or(SessionError::UnknownSession(key))
    }
}

fn check_maze(key: SessionKey, maze: &MazeDefinition) -> Result<(), SessionError> {
    if key.maze != maze.id() {
        return Err(SessionError::MazeMismatch {
            expected: key.maze,
            actual: maze.id(),
        });
    }
    Ok(())
}
