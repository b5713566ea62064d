//! Builder for hand-authored mazes.

use crate::core::{Color, Coord, MazeId};

use super::definition::{MazeDefinition, MazeLayout, Placement, PortalPair};
use super::error::MazeError;
use super::grid::Grid;

/// Builder for creating a `MazeDefinition`.
///
/// ```
/// use rust_maze::core::{Color, Coord, MazeId};
/// use rust_maze::maze::{Grid, MazeBuilder};
///
/// let grid = Grid::parse(&["#####", "#   #", "#####"]).unwrap();
/// let result = MazeBuilder::new(MazeId::new(1), grid)
///     .start(Coord::new(1, 1))
///     .key(Color::Blue, Coord::new(1, 2))
///     .build();
///
/// // Too small, and blue has no door or book.
/// assert!(result.is_err());
/// ```
pub struct MazeBuilder {
    layout: MazeLayout,
}

impl MazeBuilder {
    /// Start from a grid. The start defaults to `(1, 1)`.
    pub fn new(id: MazeId, grid: Grid) -> Self {
        Self {
            layout: MazeLayout {
                id,
                name: String::new(),
                grid,
                start: Coord::new(1, 1),
                keys: Vec::new(),
                doors: Vec::new(),
                books: Vec::new(),
                portals: Vec::new(),
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.layout.name = name.into();
        self
    }

    pub fn start(mut self, at: Coord) -> Self {
        self.layout.start = at;
        self
    }

    pub fn key(mut self, color: Color, at: Coord) -> Self {
        self.layout.keys.push(Placement::new(color, at));
        self
    }

    pub fn door(mut self, color: Color, at: Coord) -> Self {
        self.layout.doors.push(Placement::new(color, at));
        self
    }

    pub fn book(mut self, color: Color, at: Coord) -> Self {
        self.layout.books.push(Placement::new(color, at));
        self
    }

    /// Place key, door and book of one color.
    pub fn color(self, color: Color, key: Coord, door: Coord, book: Coord) -> Self {
        self.key(color, key).door(color, door).book(color, book)
    }

    /// Add a two-way portal pair.
    pub fn portal(mut self, entrance: Coord, exit: Coord) -> Self {
        self.layout.portals.push(PortalPair::linked(entrance, exit));
        self
    }

    /// Add a one-way portal pair.
    pub fn one_way_portal(mut self, entrance: Coord, exit: Coord) -> Self {
        self.layout.portals.push(PortalPair::one_way(entrance, exit));
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<MazeDefinition, MazeError> {
        MazeDefinition::from_layout(self.layout)
    }
}
