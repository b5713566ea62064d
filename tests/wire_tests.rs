//! Wire contract integration tests.
//!
//! These tests run JSON submissions through the session store and check
//! the JSON that comes back, the way the HTTP layer would use the engine.

use serde_json::{json, Value};

use rust_maze::core::{Color, Coord, MazeId, PlayerId};
use rust_maze::maze::{Grid, MazeBuilder, MazeDefinition};
use rust_maze::session::{SessionKey, SessionStore};
use rust_maze::wire::{MazeListing, MoveResponse, MoveSubmission};

fn maze() -> MazeDefinition {
    let grid = Grid::parse(&[
        "#########",
        "#       #",
        "# ##### #",
        "#       #",
        "#########",
    ])
    .unwrap();
    MazeBuilder::new(MazeId::new(1), grid)
        .name("Loop")
        .start(Coord::new(1, 1))
        .color(Color::Blue, Coord::new(1, 2), Coord::new(1, 4), Coord::new(1, 6))
        .portal(Coord::new(3, 1), Coord::new(3, 7))
        .build()
        .unwrap()
}

/// Decode a submission, apply it, and encode the response.
fn submit(store: &SessionStore, maze: &MazeDefinition, body: &str) -> Value {
    let submission: MoveSubmission = serde_json::from_str(body).unwrap();
    assert_eq!(submission.maze_id, maze.id());
    let key = SessionKey::new(PlayerId::new(1), submission.maze_id);
    store.get_or_create(PlayerId::new(1), maze);
    let applied = store.apply(key, maze, &submission.to_command()).unwrap();
    serde_json::to_value(MoveResponse::from(&applied)).unwrap()
}

// =============================================================================
// Move Round Trip Tests
// =============================================================================

/// Test the response to a move that collects a key.
#[test]
fn test_move_response_json() {
    let store = SessionStore::new();
    let maze = maze();

    let response = submit(&store, &maze, r#"{"direction":"right","steps":2,"maze_id":1}"#);
    assert_eq!(
        response,
        json!({
            "valid": true,
            "new_position": [1, 3],
            "collected_keys": ["blue"],
            "collected_books": [],
            "won": false
        })
    );
}

/// Test that a blocked move reports how it was stopped.
#[test]
fn test_blocked_move_json() {
    let store = SessionStore::new();
    let maze = maze();

    let response = submit(&store, &maze, r#"{"direction":"up","steps":3,"maze_id":1}"#);
    assert_eq!(response["valid"], json!(true));
    assert_eq!(response["new_position"], json!([1, 1]));
    assert_eq!(response["error"], json!("hit wall"));
}

/// Test that invalid input is reported as invalid with an error.
#[test]
fn test_invalid_move_json() {
    let store = SessionStore::new();
    let maze = maze();

    let response = submit(&store, &maze, r#"{"direction":"right","steps":11,"maze_id":1}"#);
    assert_eq!(response["valid"], json!(false));
    assert_eq!(response["new_position"], json!([1, 1]));
    assert_eq!(
        response["error"],
        json!("invalid input: step count 11 outside 1..=10")
    );
}

/// Test a winning sequence over the wire, including a portal hop.
#[test]
fn test_winning_sequence_json() {
    let store = SessionStore::new();
    let maze = maze();

    submit(&store, &maze, r#"{"direction":"right","steps":1,"maze_id":1}"#);
    submit(&store, &maze, r#"{"direction":"left","steps":1,"maze_id":1}"#);
    // Down the west side onto the portal, out on the east end.
    let hop = submit(&store, &maze, r#"{"direction":"down","steps":2,"maze_id":1}"#);
    assert_eq!(hop["new_position"], json!([3, 7]));

    let corner = submit(&store, &maze, r#"{"direction":"up","steps":2,"maze_id":1}"#);
    assert_eq!(corner["new_position"], json!([1, 7]));
    assert_eq!(corner["won"], json!(false));

    let win = submit(&store, &maze, r#"{"direction":"left","steps":5,"maze_id":1}"#);
    assert_eq!(win["won"], json!(true));
    assert_eq!(win["new_position"], json!([1, 6]));
    assert_eq!(win["collected_books"], json!(["blue"]));
}

// =============================================================================
// Listing Tests
// =============================================================================

/// Test the listing JSON layout.
#[test]
fn test_listing_json() {
    let listing = MazeListing::from(&maze());
    let value = serde_json::to_value(&listing).unwrap();

    assert_eq!(value["maze_id"], json!(1));
    assert_eq!(value["name"], json!("Loop"));
    assert_eq!(value["grid"][1], json!(["#", " ", " ", " ", " ", " ", " ", " ", "#"]));
    assert_eq!(value["keys"], json!({ "blue": [1, 2] }));
    assert_eq!(value["books"], json!({ "blue": [1, 6] }));
    assert_eq!(value["portals"], json!({ "3,1": [3, 7], "3,7": [3, 1] }));

    let back: MazeListing = serde_json::from_value(value).unwrap();
    assert_eq!(back, listing);
}
