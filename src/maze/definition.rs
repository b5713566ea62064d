//! Immutable maze definitions.
//!
//! ## MazeLayout
//!
//! Plain data: grid, start, per-color placements and portal pairs. This is
//! the serialized form and what builders and generators assemble.
//!
//! ## MazeDefinition
//!
//! A validated `MazeLayout` plus a cell index. Construction checks every
//! layout invariant:
//! - grid at least `MIN_DIMENSION` square, border cells are walls
//! - start, items and portal endpoints sit on floor cells
//! - each color has exactly one key, one door and one book
//! - no two features (start, item, portal endpoint) share a cell
//!
//! Because features are exclusive per cell, the index maps each cell to at
//! most one `Feature`, and the move rules never need a tie-break order.
//! Deserialization goes through the same validation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;

use crate::core::{Color, ColorSet, Coord, MazeId, MIN_DIMENSION};

use super::error::MazeError;
use super::grid::Grid;

/// Kind of colored item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Key,
    Door,
    Book,
}

impl ItemKind {
    /// All kinds, in collection order.
    pub const ALL: [ItemKind; 3] = [ItemKind::Key, ItemKind::Door, ItemKind::Book];
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ItemKind::Key => "key",
            ItemKind::Door => "door",
            ItemKind::Book => "book",
        })
    }
}

/// A colored item at a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub color: Color,
    pub at: Coord,
}

impl Placement {
    #[must_use]
    pub const fn new(color: Color, at: Coord) -> Self {
        Self { color, at }
    }
}

/// A linked pair of portal cells.
///
/// Stepping onto `entrance` relocates to `exit`. When `two_way` is set,
/// stepping onto `exit` relocates to `entrance` as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortalPair {
    pub entrance: Coord,
    pub exit: Coord,
    #[serde(default = "PortalPair::default_two_way")]
    pub two_way: bool,
}

impl PortalPair {
    /// Create a two-way portal pair.
    #[must_use]
    pub const fn linked(entrance: Coord, exit: Coord) -> Self {
        Self {
            entrance,
            exit,
            two_way: true,
        }
    }

    /// Create a one-way portal pair.
    #[must_use]
    pub const fn one_way(entrance: Coord, exit: Coord) -> Self {
        Self {
            entrance,
            exit,
            two_way: false,
        }
    }

    const fn default_two_way() -> bool {
        true
    }
}

/// What occupies a cell, beyond its wall/floor kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    Start,
    Key(Color),
    Door(Color),
    Book(Color),
    /// Portal endpoint that relocates to `exit` on entry.
    Portal { exit: Coord },
    /// Landing cell of a one-way portal.
    PortalExit,
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feature::Start => f.write_str("start"),
            Feature::Key(c) => write!(f, "{c} key"),
            Feature::Door(c) => write!(f, "{c} door"),
            Feature::Book(c) => write!(f, "{c} book"),
            Feature::Portal { exit } => write!(f, "portal to {exit}"),
            Feature::PortalExit => f.write_str("portal exit"),
        }
    }
}

/// Serialized maze layout. Unvalidated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeLayout {
    pub id: MazeId,
    pub name: String,
    pub grid: Grid,
    pub start: Coord,
    pub keys: Vec<Placement>,
    pub doors: Vec<Placement>,
    pub books: Vec<Placement>,
    #[serde(default)]
    pub portals: Vec<PortalPair>,
}

impl MazeLayout {
    /// Placements of one item kind.
    #[must_use]
    pub fn placements(&self, kind: ItemKind) -> &[Placement] {
        match kind {
            ItemKind::Key => &self.keys,
            ItemKind::Door => &self.doors,
            ItemKind::Book => &self.books,
        }
    }
}

/// A validated, immutable maze.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MazeLayout", into = "MazeLayout")]
pub struct MazeDefinition {
    layout: MazeLayout,
    colors: ColorSet,
    index: FxHashMap<Coord, Feature>,
}

impl MazeDefinition {
    /// Validate a layout.
    pub fn from_layout(layout: MazeLayout) -> Result<Self, MazeError> {
        let grid = &layout.grid;
        if grid.rows() < MIN_DIMENSION || grid.cols() < MIN_DIMENSION {
            return Err(MazeError::TooSmall {
                rows: grid.rows(),
                cols: grid.cols(),
                min: MIN_DIMENSION,
            });
        }
        if let Some(open) = border_cells(grid).find(|&c| grid.is_floor(c)) {
            return Err(MazeError::OpenBorder(open));
        }

        let mut index = FxHashMap::default();
        claim(&mut index, grid, layout.start, Feature::Start)?;

        let mut per_kind = [ColorSet::empty(); 3];
        for (slot, kind) in per_kind.iter_mut().zip(ItemKind::ALL) {
            for placement in layout.placements(kind) {
                if !slot.insert(placement.color) {
                    return Err(MazeError::DuplicateColor {
                        kind,
                        color: placement.color,
                    });
                }
                let feature = match kind {
                    ItemKind::Key => Feature::Key(placement.color),
                    ItemKind::Door => Feature::Door(placement.color),
                    ItemKind::Book => Feature::Book(placement.color),
                };
                claim(&mut index, grid, placement.at, feature)?;
            }
        }

        let colors: ColorSet = per_kind.iter().flat_map(|set| set.iter()).collect();
        if colors.is_empty() {
            return Err(MazeError::NoColors);
        }
        for (set, kind) in per_kind.iter().zip(ItemKind::ALL) {
            if let Some(color) = colors.iter().find(|c| !set.contains(*c)) {
                return Err(MazeError::MissingPlacement { kind, color });
            }
        }

        for portal in &layout.portals {
            if portal.entrance == portal.exit {
                return Err(MazeError::DegeneratePortal(portal.entrance));
            }
            claim(&mut index, grid, portal.entrance, Feature::Portal { exit: portal.exit })?;
            let landing = if portal.two_way {
                Feature::Portal {
                    exit: portal.entrance,
                }
            } else {
                Feature::PortalExit
            };
            claim(&mut index, grid, portal.exit, landing)?;
        }

        Ok(Self {
            layout,
            colors,
            index,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> MazeId {
        self.layout.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.layout.name
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.layout.grid
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.layout.grid.rows()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.layout.grid.cols()
    }

    #[must_use]
    pub fn start(&self) -> Coord {
        self.layout.start
    }

    /// Colors placed in this maze. Collecting every one of their books wins.
    #[must_use]
    pub fn colors(&self) -> ColorSet {
        self.colors
    }

    #[must_use]
    pub fn keys(&self) -> &[Placement] {
        &self.layout.keys
    }

    #[must_use]
    pub fn doors(&self) -> &[Placement] {
        &self.layout.doors
    }

    #[must_use]
    pub fn books(&self) -> &[Placement] {
        &self.layout.books
    }

    #[must_use]
    pub fn portals(&self) -> &[PortalPair] {
        &self.layout.portals
    }

    /// The underlying layout.
    #[must_use]
    pub fn layout(&self) -> &MazeLayout {
        &self.layout
    }

    // === Lookups ===

    /// Position of an item of `kind` and `color`.
    #[must_use]
    pub fn item(&self, kind: ItemKind, color: Color) -> Option<Coord> {
        self.layout
            .placements(kind)
            .iter()
            .find(|p| p.color == color)
            .map(|p| p.at)
    }

    /// The feature occupying `at`, if any.
    #[must_use]
    pub fn feature_at(&self, at: Coord) -> Option<Feature> {
        self.index.get(&at).copied()
    }

    /// Where stepping onto `at` relocates to, if it is a portal.
    #[must_use]
    pub fn portal_exit(&self, at: Coord) -> Option<Coord> {
        match self.feature_at(at) {
            Some(Feature::Portal { exit }) => Some(exit),
            _ => None,
        }
    }

    // === Snapshots ===

    /// Compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, MazeError> {
        bincode::serialize(self).map_err(|e| MazeError::Snapshot(e.to_string()))
    }

    /// Decode and re-validate a snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MazeError> {
        bincode::deserialize(bytes).map_err(|e| MazeError::Snapshot(e.to_string()))
    }
}

impl TryFrom<MazeLayout> for MazeDefinition {
    type Error = MazeError;

    fn try_from(layout: MazeLayout) -> Result<Self, Self::Error> {
        Self::from_layout(layout)
    }
}

impl From<MazeDefinition> for MazeLayout {
    fn from(maze: MazeDefinition) -> Self {
        maze.layout
    }
}

fn claim(
    index: &mut FxHashMap<Coord, Feature>,
    grid: &Grid,
    at: Coord,
    feature: Feature,
) -> Result<(), MazeError> {
    if !grid.is_floor(at) {
        return Err(MazeError::NotFloor {
            what: feature.to_string(),
            at,
        });
    }
    match index.entry(at) {
        Entry::Occupied(existing) => Err(MazeError::Overlap {
            at,
            first: existing.get().to_string(),
            second: feature.to_string(),
        }),
        Entry::Vacant(slot) => {
            slot.insert(feature);
            Ok(())
        }
    }
}

fn border_cells(grid: &Grid) -> impl Iterator<Item = Coord> + '_ {
    let (rows, cols) = (grid.rows(), grid.cols());
    let horizontal = (0..cols).flat_map(move |c| [Coord::new(0, c), Coord::new(rows - 1, c)]);
    let vertical = (1..rows - 1).flat_map(move |r| [Coord::new(r, 0), Coord::new(r, cols - 1)]);
    horizontal.chain(vertical)
}
