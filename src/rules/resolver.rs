//! Move resolution.
//!
//! `MoveResolver` maps (state, maze, request) to a `MoveOutcome`. It is a
//! pure function of its inputs: no hidden state, no I/O, no clock, so
//! identical inputs always give identical outcomes.
//!
//! ## Order of checks
//!
//! 1. Won state: rejected with `GameAlreadyWon`.
//! 2. Malformed direction or step count, or a state from another maze:
//!    rejected with `InvalidInput`.
//! 3. Unit steps via the step kernel until the budget runs out, an
//!    obstacle blocks (`Blocked`, still valid), or the last book is
//!    collected (win; remaining budget discarded).

use crate::core::{GameState, InputError, MoveRequest};
use crate::maze::MazeDefinition;

use super::outcome::{MoveEvent, MoveEvents, MoveOutcome, MoveReason};
use super::step::{self, Progress, UnitStep};

/// The gameplay rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveResolver;

impl MoveResolver {
    /// Create a resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Resolve a raw move request.
    pub fn resolve(
        &self,
        state: &GameState,
        maze: &MazeDefinition,
        direction: &str,
        steps: i64,
    ) -> MoveOutcome {
        if state.won {
            return MoveOutcome::rejected(state, MoveReason::GameAlreadyWon);
        }
        match MoveRequest::parse(direction, steps) {
            Ok(request) => self.resolve_request(state, maze, request),
            Err(err) => MoveOutcome::rejected(state, MoveReason::InvalidInput(err)),
        }
    }

    /// Resolve an already validated request.
    pub fn resolve_request(
        &self,
        state: &GameState,
        maze: &MazeDefinition,
        request: MoveRequest,
    ) -> MoveOutcome {
        if state.won {
            return MoveOutcome::rejected(state, MoveReason::GameAlreadyWon);
        }
        if state.maze_id != maze.id() {
            let err = InputError::MazeMismatch {
                state: state.maze_id,
                maze: maze.id(),
            };
            return MoveOutcome::rejected(state, MoveReason::InvalidInput(err));
        }

        let goal = maze.colors();
        let mut progress = Progress::from(state);
        let mut events = MoveEvents::new();
        let mut steps_achieved = 0u8;
        let mut reason = None;
        let mut won = false;

        for _ in 0..request.steps() {
            let advance = match step::advance(maze, &mut progress, request.direction()) {
                UnitStep::Advanced(advance) => advance,
                UnitStep::Blocked(block) => {
                    reason = Some(MoveReason::Blocked(block));
                    break;
                }
            };
            steps_achieved += 1;

            if let Some(color) = advance.key {
                events.push(MoveEvent::KeyCollected {
                    color,
                    at: advance.entered,
                });
            }
            if let Some(color) = advance.book {
                events.push(MoveEvent::BookCollected {
                    color,
                    at: advance.entered,
                });
            }
            if let Some(to) = advance.teleport {
                events.push(MoveEvent::Teleported {
                    from: advance.entered,
                    to,
                });
            }

            if progress.has_all_books(goal) {
                won = true;
                events.push(MoveEvent::Won {
                    at: progress.position,
                });
                break;
            }
        }

        debug_assert!(progress.books.iter().all(|c| progress.keys.contains(c)));

        MoveOutcome {
            valid: true,
            new_state: GameState {
                maze_id: state.maze_id,
                position: progress.position,
                collected_keys: progress.keys,
                collected_books: progress.books,
                move_count: state.move_count,
                won,
            },
            steps_achieved,
            reason,
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Coord, Direction, InputError, MazeId};
    use crate::maze::{Grid, MazeBuilder};
    use crate::rules::BlockReason;

    fn corridor() -> MazeDefinition {
        let grid = Grid::parse(&[
            "#########",
            "#       #",
            "#########",
            "#########",
            "#########",
        ])
        .unwrap();
        MazeBuilder::new(MazeId::new(1), grid)
            .start(Coord::new(1, 1))
            .color(Color::Blue, Coord::new(1, 3), Coord::new(1, 5), Coord::new(1, 6))
            .build()
            .unwrap()
    }

    fn start(maze: &MazeDefinition) -> GameState {
        GameState::new(maze.id(), maze.start())
    }

    #[test]
    fn test_full_move() {
        let maze = corridor();
        let outcome = MoveResolver.resolve(&start(&maze), &maze, "right", 3);

        assert!(outcome.valid);
        assert_eq!(outcome.steps_achieved, 3);
        assert_eq!(outcome.reason, None);
        assert_eq!(outcome.new_state.position, Coord::new(1, 4));
        assert!(outcome.new_state.has_key(Color::Blue));
        assert_eq!(outcome.new_state.move_count, 0); // Commit increments
    }

    #[test]
    fn test_truncated_by_wall() {
        let maze = corridor();
        let outcome = MoveResolver.resolve(&start(&maze), &maze, "left", 4);

        assert!(outcome.valid);
        assert_eq!(outcome.steps_achieved, 0);
        assert_eq!(outcome.reason, Some(MoveReason::Blocked(BlockReason::Wall)));
        assert_eq!(outcome.new_state, start(&maze));
    }

    #[test]
    fn test_win_discards_remaining_steps() {
        let maze = corridor();
        let outcome = MoveResolver.resolve(&start(&maze), &maze, "right", 10);

        assert!(outcome.valid);
        assert!(outcome.new_state.won);
        assert_eq!(outcome.steps_achieved, 5);
        assert_eq!(outcome.new_state.position, Coord::new(1, 6));
        assert!(outcome.is_winning());
        assert_eq!(outcome.reason, None);
    }

    #[test]
    fn test_rejects_when_won() {
        let maze = corridor();
        let mut state = start(&maze);
        state.won = true;

        // Won check precedes input validation.
        let outcome = MoveResolver.resolve(&state, &maze, "diagonal", 99);
        assert!(!outcome.valid);
        assert_eq!(outcome.reason, Some(MoveReason::GameAlreadyWon));
        assert_eq!(outcome.new_state, state);
    }

    #[test]
    fn test_rejects_bad_input() {
        let maze = corridor();
        let state = start(&maze);

        let outcome = MoveResolver.resolve(&state, &maze, "right", 0);
        assert!(!outcome.valid);
        assert!(matches!(
            outcome.reason,
            Some(MoveReason::InvalidInput(InputError::StepsOutOfRange { steps: 0, .. }))
        ));
        assert_eq!(outcome.new_state, state);
    }

    #[test]
    fn test_rejects_foreign_state() {
        let maze = corridor();
        let state = GameState::new(MazeId::new(2), maze.start());

        let request = MoveRequest::new(Direction::Right, 1).unwrap();
        let outcome = MoveResolver.resolve_request(&state, &maze, request);
        assert!(!outcome.valid);
        assert!(matches!(
            outcome.reason,
            Some(MoveReason::InvalidInput(InputError::MazeMismatch { .. }))
        ));
    }

    #[test]
    fn test_deterministic() {
        let maze = corridor();
        let state = start(&maze);
        let first = MoveResolver.resolve(&state, &maze, "right", 7);
        for _ in 0..5 {
            assert_eq!(MoveResolver.resolve(&state, &maze, "right", 7), first);
        }
    }
}
