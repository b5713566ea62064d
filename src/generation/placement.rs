//! Start, item and portal placement on a carved grid.
//!
//! Placement relies on the carved floor being a tree rooted at the start.
//! For each color a door is picked first, then a book from the door's
//! subtree (strictly farther, and only reachable through the door) and a
//! key strictly closer to the start than the door. Picks that collide with
//! an occupied cell are resampled up to the placement attempt bound.
//!
//! Placement does not guarantee solvability across colors (a key may end
//! up behind another color's door); the search in `search` decides that.

use rustc_hash::FxHashSet;
use std::collections::VecDeque;

use crate::core::{ColorSet, Coord, MazeRng};
use crate::maze::{Grid, Placement, PortalPair};

/// Breadth-first distances and parents over the floor from a root.
pub(crate) struct PathTree {
    cols: usize,
    dist: Vec<Option<usize>>,
    parent: Vec<Option<Coord>>,
}

impl PathTree {
    pub(crate) fn build(grid: &Grid, root: Coord) -> Self {
        let cols = grid.cols();
        let mut dist = vec![None; grid.rows() * cols];
        let mut parent = vec![None; grid.rows() * cols];
        dist[root.row * cols + root.col] = Some(0);

        let mut queue = VecDeque::from([root]);
        while let Some(cell) = queue.pop_front() {
            let d = dist[cell.row * cols + cell.col].unwrap_or(0);
            for next in grid.floor_neighbors(cell) {
                let idx = next.row * cols + next.col;
                if dist[idx].is_none() {
                    dist[idx] = Some(d + 1);
                    parent[idx] = Some(cell);
                    queue.push_back(next);
                }
            }
        }

        Self { cols, dist, parent }
    }

    /// Path distance from the root, if reachable.
    pub(crate) fn distance(&self, at: Coord) -> Option<usize> {
        self.dist.get(at.row * self.cols + at.col).copied().flatten()
    }

    /// Check if `cell` lies strictly below `ancestor`.
    pub(crate) fn is_descendant(&self, cell: Coord, ancestor: Coord) -> bool {
        let (Some(mut d), Some(target)) = (self.distance(cell), self.distance(ancestor)) else {
            return false;
        };
        let mut current = cell;
        while d > target {
            match self.parent[current.row * self.cols + current.col] {
                Some(up) => {
                    current = up;
                    d -= 1;
                }
                None => return false,
            }
        }
        current == ancestor && cell != ancestor
    }
}

/// Key, door and book placements for every color.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemSet {
    pub keys: Vec<Placement>,
    pub doors: Vec<Placement>,
    pub books: Vec<Placement>,
}

/// Pick a random floor cell with at least one floor neighbor.
pub fn pick_start(grid: &Grid, rng: &mut MazeRng) -> Option<Coord> {
    let candidates: Vec<Coord> = grid
        .floor_cells()
        .filter(|&c| !grid.floor_neighbors(c).is_empty())
        .collect();
    rng.choose(&candidates).copied()
}

/// Place one key, door and book per color.
///
/// Placed cells are added to `occupied`. Returns `None` if some color
/// cannot be placed within `attempts` resamples.
pub fn place_items(
    grid: &Grid,
    start: Coord,
    colors: ColorSet,
    rng: &mut MazeRng,
    attempts: u32,
    occupied: &mut FxHashSet<Coord>,
) -> Option<ItemSet> {
    let tree = PathTree::build(grid, start);
    let floor: Vec<Coord> = grid.floor_cells().collect();
    let mut items = ItemSet::default();

    for color in colors.iter() {
        let mut placed = None;
        for _ in 0..attempts {
            let door = floor[rng.gen_index(floor.len())];
            let Some(door_dist) = tree.distance(door) else {
                continue;
            };
            if door_dist < 2 || occupied.contains(&door) {
                continue;
            }

            let books: Vec<Coord> = floor
                .iter()
                .copied()
                .filter(|&c| tree.is_descendant(c, door))
                .collect();
            let keys: Vec<Coord> = floor
                .iter()
                .copied()
                .filter(|&c| tree.distance(c).is_some_and(|d| d >= 1 && d < door_dist))
                .collect();
            let (Some(&book), Some(&key)) = (rng.choose(&books), rng.choose(&keys)) else {
                continue;
            };
            if occupied.contains(&book) || occupied.contains(&key) {
                continue;
            }
            placed = Some((key, door, book));
            break;
        }

        let (key, door, book) = placed?;
        occupied.extend([key, door, book]);
        items.keys.push(Placement::new(color, key));
        items.doors.push(Placement::new(color, door));
        items.books.push(Placement::new(color, book));
    }

    Some(items)
}

/// Place `count` two-way portal pairs on unoccupied floor cells.
///
/// Free cells are shuffled and paired in order, so endpoints are always
/// distinct. Placed endpoints are added to `occupied`. Returns `None` if
/// fewer than `2 * count` free cells remain.
pub fn place_portals(
    grid: &Grid,
    count: usize,
    rng: &mut MazeRng,
    occupied: &mut FxHashSet<Coord>,
) -> Option<Vec<PortalPair>> {
    let mut free: Vec<Coord> = grid.floor_cells().filter(|c| !occupied.contains(c)).collect();
    if free.len() < 2 * count {
        return None;
    }
    rng.shuffle(&mut free);

    let portals: Vec<PortalPair> = free
        .chunks_exact(2)
        .take(count)
        .map(|pair| PortalPair::linked(pair[0], pair[1]))
        .collect();
    for pair in &portals {
        occupied.extend([pair.entrance, pair.exit]);
    }
    Some(portals)
}
