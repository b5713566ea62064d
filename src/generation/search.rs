//! Solvability and connectivity search.
//!
//! A breadth-first search over `Progress` (position plus collected keys and
//! books), driven by the same unit-step kernel the move resolver uses. A
//! door edge exists only once its key is held; a book is collected as a
//! side effect of entering its cell with the key in hand.
//!
//! The search keeps expanding past winning states so that `reachable`
//! covers every cell a player could ever stand on or step through.

use rustc_hash::FxHashSet;
use std::collections::VecDeque;

use crate::core::{Coord, Direction};
use crate::maze::MazeDefinition;
use crate::rules::step::{advance, Progress, UnitStep};

/// Result of exploring a maze's state space.
#[derive(Clone, Debug)]
pub struct SearchReport {
    /// Some reachable state holds every book.
    pub solvable: bool,
    /// Fewest unit steps from the start to a winning state.
    pub min_unit_steps: Option<usize>,
    /// Cells entered by any reachable transition, plus the start.
    pub reachable: FxHashSet<Coord>,
    /// Distinct progress states visited.
    pub states_explored: usize,
}

impl SearchReport {
    /// Floor cells of `maze` that no transition ever enters.
    #[must_use]
    pub fn unreachable_floor(&self, maze: &MazeDefinition) -> Vec<Coord> {
        maze.grid()
            .floor_cells()
            .filter(|c| !self.reachable.contains(c))
            .collect()
    }

    /// Check if every floor cell of `maze` is reachable.
    #[must_use]
    pub fn is_fully_connected(&self, maze: &MazeDefinition) -> bool {
        maze.grid().floor_cells().all(|c| self.reachable.contains(&c))
    }
}

/// Explore every progress state reachable from the maze start.
pub fn explore(maze: &MazeDefinition) -> SearchReport {
    let goal = maze.colors();
    let start = Progress::start(maze);

    let mut seen: FxHashSet<Progress> = FxHashSet::default();
    let mut reachable: FxHashSet<Coord> = FxHashSet::default();
    let mut queue = VecDeque::new();
    let mut min_unit_steps = None;

    seen.insert(start);
    reachable.insert(start.position);
    queue.push_back((start, 0usize));

    while let Some((progress, depth)) = queue.pop_front() {
        if min_unit_steps.is_none() && progress.has_all_books(goal) {
            min_unit_steps = Some(depth);
        }

        for direction in Direction::ALL {
            let mut next = progress;
            let UnitStep::Advanced(step) = advance(maze, &mut next, direction) else {
                continue;
            };
            reachable.insert(step.entered);
            reachable.insert(next.position);
            if seen.insert(next) {
                queue.push_back((next, depth + 1));
            }
        }
    }

    SearchReport {
        solvable: min_unit_steps.is_some(),
        min_unit_steps,
        reachable,
        states_explored: seen.len(),
    }
}

/// Check if a player can collect every book in `maze`.
#[must_use]
pub fn is_solvable(maze: &MazeDefinition) -> bool {
    explore(maze).solvable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, MazeId};
    use crate::maze::{Grid, MazeBuilder};

    fn corridor_grid() -> Grid {
        Grid::parse(&[
            "#########",
            "#       #",
            "#########",
            "#########",
            "#########",
        ])
        .unwrap()
    }

    #[test]
    fn test_corridor_solvable() {
        let maze = MazeBuilder::new(MazeId::new(1), corridor_grid())
            .color(Color::Blue, Coord::new(1, 3), Coord::new(1, 5), Coord::new(1, 6))
            .build()
            .unwrap();

        let report = explore(&maze);
        assert!(report.solvable);
        assert_eq!(report.min_unit_steps, Some(5));
        assert!(report.is_fully_connected(&maze));
        assert!(report.unreachable_floor(&maze).is_empty());
    }

    #[test]
    fn test_key_behind_own_door_is_unsolvable() {
        let maze = MazeBuilder::new(MazeId::new(1), corridor_grid())
            .color(Color::Blue, Coord::new(1, 5), Coord::new(1, 3), Coord::new(1, 6))
            .build()
            .unwrap();

        let report = explore(&maze);
        assert!(!report.solvable);
        assert_eq!(report.min_unit_steps, None);
        assert_eq!(
            report.unreachable_floor(&maze),
            vec![
                Coord::new(1, 3),
                Coord::new(1, 4),
                Coord::new(1, 5),
                Coord::new(1, 6),
                Coord::new(1, 7),
            ]
        );
    }

    #[test]
    fn test_book_before_key_needs_revisit() {
        // The red book sits between start and the red key: passing it first
        // collects nothing, so the shortest win walks back over it.
        let maze = MazeBuilder::new(MazeId::new(1), corridor_grid())
            .color(Color::Red, Coord::new(1, 4), Coord::new(1, 6), Coord::new(1, 2))
            .build()
            .unwrap();

        let report = explore(&maze);
        assert!(report.solvable);
        assert_eq!(report.min_unit_steps, Some(5));
    }

    #[test]
    fn test_portal_cells_count_as_reachable() {
        let grid = Grid::parse(&[
            "#######",
            "#     #",
            "# ### #",
            "#     #",
            "#######",
        ])
        .unwrap();
        let maze = MazeBuilder::new(MazeId::new(1), grid)
            .color(Color::Green, Coord::new(1, 2), Coord::new(1, 3), Coord::new(1, 4))
            .portal(Coord::new(3, 2), Coord::new(3, 4))
            .build()
            .unwrap();

        let report = explore(&maze);
        assert!(report.solvable);
        assert!(report.reachable.contains(&Coord::new(3, 2)));
        assert!(report.reachable.contains(&Coord::new(3, 4)));
        assert!(report.is_fully_connected(&maze));
    }
}
