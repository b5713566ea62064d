//! Randomized Prim's carving.
//!
//! Carving works on the lattice of interior cells with odd row and odd
//! column. Each frontier entry is a (wall, cell) pair: a lattice cell two
//! steps from the visited region and the wall between. Picking a frontier
//! entry whose cell is still unvisited opens both the wall and the cell.
//!
//! Every lattice cell is joined through exactly one wall, so the floor
//! forms a spanning tree: one simple path between any two floor cells.
//! When a dimension is even, the last interior row or column stays wall.

use crate::core::{Coord, Direction, MazeRng};
use crate::maze::{Cell, Grid};

/// Check if `at` is a carving lattice cell of a `rows`×`cols` grid.
#[must_use]
pub fn is_lattice_cell(rows: usize, cols: usize, at: Coord) -> bool {
    at.row % 2 == 1 && at.col % 2 == 1 && at.row + 1 < rows && at.col + 1 < cols
}

/// Carve a spanning-tree maze.
///
/// `origin` seeds the carving; when `None` a random lattice cell is used.
/// Requires `rows` and `cols` of at least 3.
pub fn carve(rows: usize, cols: usize, origin: Option<Coord>, rng: &mut MazeRng) -> Grid {
    let mut grid = Grid::filled(rows, cols, Cell::Wall);
    let origin = origin.unwrap_or_else(|| {
        let lattice_rows = (rows - 1) / 2;
        let lattice_cols = (cols - 1) / 2;
        let pick = rng.gen_index(lattice_rows * lattice_cols);
        Coord::new(2 * (pick / lattice_cols) + 1, 2 * (pick % lattice_cols) + 1)
    });
    debug_assert!(is_lattice_cell(rows, cols, origin));

    let mut visited = vec![false; rows * cols];
    let mut frontier: Vec<(Coord, Coord)> = Vec::new();

    grid.set(origin, Cell::Floor);
    visited[origin.row * cols + origin.col] = true;
    push_frontier(rows, cols, origin, &visited, &mut frontier);

    while !frontier.is_empty() {
        let (wall, cell) = frontier.swap_remove(rng.gen_index(frontier.len()));
        let idx = cell.row * cols + cell.col;
        if visited[idx] {
            continue;
        }
        grid.set(wall, Cell::Floor);
        grid.set(cell, Cell::Floor);
        visited[idx] = true;
        push_frontier(rows, cols, cell, &visited, &mut frontier);
    }

    grid
}

fn push_frontier(
    rows: usize,
    cols: usize,
    from: Coord,
    visited: &[bool],
    frontier: &mut Vec<(Coord, Coord)>,
) {
    for direction in Direction::ALL {
        let Some(wall) = from.step(direction) else {
            continue;
        };
        let Some(cell) = wall.step(direction) else {
            continue;
        };
        if is_lattice_cell(rows, cols, cell) && !visited[cell.row * cols + cell.col] {
            frontier.push((wall, cell));
        }
    }
}
