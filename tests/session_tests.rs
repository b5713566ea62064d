//! Session store integration tests.
//!
//! These tests verify that moves on one session are serialized, that
//! optimistic versions detect stale submissions, and that the store only
//! delegates to its rules engine.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use rust_maze::core::{Color, Coord, GameState, MazeId, PlayerId};
use rust_maze::maze::{Grid, MazeBuilder, MazeDefinition};
use rust_maze::rules::{MoveOutcome, RulesEngine};
use rust_maze::session::{MoveCommand, SessionError, SessionKey, SessionStore};

fn maze(id: u32) -> MazeDefinition {
    let grid = Grid::parse(&[
        "#########",
        "#       #",
        "# ##### #",
        "#       #",
        "#########",
    ])
    .unwrap();
    MazeBuilder::new(MazeId::new(id), grid)
        .start(Coord::new(1, 1))
        .color(Color::Orange, Coord::new(1, 3), Coord::new(1, 5), Coord::new(1, 7))
        .build()
        .unwrap()
}

// =============================================================================
// Concurrency Tests
// =============================================================================

/// Test that concurrent unversioned moves on one session are all applied.
#[test]
fn test_concurrent_moves_serialize() {
    let store = Arc::new(SessionStore::new());
    let maze = Arc::new(maze(1));
    store.create(PlayerId::new(1), &maze);
    let key = SessionKey::new(PlayerId::new(1), MazeId::new(1));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            let maze = Arc::clone(&maze);
            thread::spawn(move || {
                for _ in 0..25 {
                    // Always blocked by the wall above: valid, no movement.
                    let applied = store.apply(key, &maze, &MoveCommand::new("up", 1)).unwrap();
                    assert!(applied.outcome.valid);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.version(key), Some(200));
    let history = store.history(key).unwrap();
    assert_eq!(history.len(), 200);
    let counters: Vec<u64> = history.iter().map(|r| r.move_counter).collect();
    assert_eq!(counters, (1..=200).collect::<Vec<u64>>());
}

/// Test that racing versioned moves commit exactly once per version.
#[test]
fn test_versioned_moves_detect_conflicts() {
    let store = Arc::new(SessionStore::new());
    let maze = Arc::new(maze(1));
    store.create(PlayerId::new(1), &maze);
    let key = SessionKey::new(PlayerId::new(1), MazeId::new(1));
    let committed = Arc::new(AtomicUsize::new(0));
    let stale = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..6)
        .map(|_| {
            let store = Arc::clone(&store);
            let maze = Arc::clone(&maze);
            let committed = Arc::clone(&committed);
            let stale = Arc::clone(&stale);
            thread::spawn(move || {
                for _ in 0..20 {
                    let version = store.version(key).unwrap();
                    let command = MoveCommand::new("up", 1).with_expected_version(version);
                    match store.apply(key, &maze, &command) {
                        Ok(_) => committed.fetch_add(1, Ordering::SeqCst),
                        Err(SessionError::StaleState { expected, actual }) => {
                            assert!(actual > expected);
                            stale.fetch_add(1, Ordering::SeqCst)
                        }
                        Err(other) => panic!("unexpected error: {other}"),
                    };
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let committed = committed.load(Ordering::SeqCst);
    assert_eq!(committed + stale.load(Ordering::SeqCst), 120);
    assert_eq!(store.version(key), Some(committed as u64));
    assert_eq!(store.history(key).unwrap().len(), committed);
}

/// Test that sessions of different players are independent.
#[test]
fn test_sessions_are_independent() {
    let store = SessionStore::new();
    let maze = maze(1);
    store.create(PlayerId::new(1), &maze);
    store.create(PlayerId::new(2), &maze);
    let first = SessionKey::new(PlayerId::new(1), MazeId::new(1));
    let second = SessionKey::new(PlayerId::new(2), MazeId::new(1));

    store.apply(first, &maze, &MoveCommand::new("right", 3)).unwrap();

    assert_eq!(store.state(first).unwrap().position, Coord::new(1, 4));
    assert_eq!(store.state(second).unwrap().position, Coord::new(1, 1));
    assert_eq!(store.version(second), Some(0));
}

/// Test that one player may hold sessions on several mazes.
#[test]
fn test_player_on_two_mazes() {
    let store = SessionStore::new();
    let (a, b) = (maze(1), maze(2));
    store.create(PlayerId::new(1), &a);
    store.create(PlayerId::new(1), &b);
    assert_eq!(store.len(), 2);

    let key_b = SessionKey::new(PlayerId::new(1), MazeId::new(2));
    let err = store.apply(key_b, &a, &MoveCommand::new("right", 1)).unwrap_err();
    assert!(matches!(err, SessionError::MazeMismatch { .. }));
}

// =============================================================================
// Lifecycle Tests
// =============================================================================

/// Test a full game through the store, then the post-win rejection.
#[test]
fn test_full_game_history() {
    let store = SessionStore::new();
    let maze = maze(1);
    let key = SessionKey::new(PlayerId::new(7), MazeId::new(1));
    store.get_or_create(PlayerId::new(7), &maze);

    let moves = [("right", 2), ("diagonal", 1), ("right", 10), ("left", 1)];
    let results: Vec<_> = moves
        .iter()
        .map(|(d, s)| store.apply(key, &maze, &MoveCommand::new(*d, *s)).unwrap())
        .collect();

    assert!(results[0].outcome.valid);
    assert!(!results[1].outcome.valid);
    assert!(results[2].state.won);
    assert_eq!(results[2].state.position, Coord::new(1, 7));
    assert!(!results[3].outcome.valid);

    let history = store.history(key).unwrap();
    let summary: Vec<_> = history
        .iter()
        .map(|r| (r.direction.as_str(), r.valid, r.move_counter, r.won))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("right", true, 1, false),
            ("diagonal", false, 1, false),
            ("right", true, 2, true),
            ("left", false, 2, true),
        ]
    );
}

/// Test that history snapshots are unaffected by later moves.
#[test]
fn test_history_snapshot_is_stable() {
    let store = SessionStore::new();
    let maze = maze(1);
    let key = SessionKey::new(PlayerId::new(1), MazeId::new(1));
    store.create(PlayerId::new(1), &maze);

    store.apply(key, &maze, &MoveCommand::new("right", 1)).unwrap();
    let snapshot = store.history(key).unwrap();
    store.apply(key, &maze, &MoveCommand::new("right", 1)).unwrap();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(store.history(key).unwrap().len(), 2);
}

// =============================================================================
// Rules Seam Tests
// =============================================================================

/// Rules that move the player nowhere and reject odd step counts.
struct EvenStepsOnly;

impl RulesEngine for EvenStepsOnly {
    fn resolve_move(
        &self,
        state: &GameState,
        _maze: &MazeDefinition,
        _direction: &str,
        steps: i64,
    ) -> MoveOutcome {
        MoveOutcome {
            valid: steps % 2 == 0,
            new_state: state.clone(),
            steps_achieved: 0,
            reason: None,
            events: Default::default(),
        }
    }
}

/// Test that the store commits exactly what its rules engine decides.
#[test]
fn test_store_delegates_to_rules() {
    let store = SessionStore::with_rules(EvenStepsOnly);
    let maze = maze(1);
    let key = SessionKey::new(PlayerId::new(1), MazeId::new(1));
    store.create(PlayerId::new(1), &maze);

    store.apply(key, &maze, &MoveCommand::new("anything", 2)).unwrap();
    store.apply(key, &maze, &MoveCommand::new("anything", 3)).unwrap();
    store.apply(key, &maze, &MoveCommand::new("anything", 4)).unwrap();

    assert_eq!(store.version(key), Some(2));
    assert_eq!(store.state(key).unwrap().position, maze.start());
}
