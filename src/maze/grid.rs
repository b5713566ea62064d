//! Rectangular wall/floor grid.
//!
//! Cells are stored row-major in a flat `Vec`. On the wire a grid is a
//! list of row strings where `#` is a wall and a space is floor (`.` is
//! also accepted as floor when parsing, for readable test fixtures).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Coord, Direction};

use super::error::MazeError;

/// Grid cell kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    /// Impassable.
    Wall,
    /// Passable.
    Floor,
}

impl Cell {
    /// Symbol used in row strings.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Floor => ' ',
        }
    }

    /// Parse a row-string symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '#' => Some(Cell::Wall),
            ' ' | '.' => Some(Cell::Floor),
            _ => None,
        }
    }
}

/// A rectangular grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell set to `cell`.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, cell: Cell) -> Self {
        Self {
            rows,
            cols,
            cells: vec![cell; rows * cols],
        }
    }

    /// Parse a grid from row strings.
    ///
    /// ```
    /// use rust_maze::maze::{Cell, Grid};
    /// use rust_maze::core::Coord;
    ///
    /// let grid = Grid::parse(&["###", "# #", "###"]).unwrap();
    /// assert_eq!(grid.get(Coord::new(1, 1)), Some(Cell::Floor));
    /// ```
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self, MazeError> {
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.as_ref().chars().count());
        if rows == 0 || cols == 0 {
            return Err(MazeError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != cols {
                return Err(MazeError::RaggedRow {
                    row,
                    found,
                    expected: cols,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or(MazeError::UnknownSymbol {
                    symbol,
                    at: Coord::new(row, col),
                })?;
                cells.push(cell);
            }
        }

        Ok(Self { rows, cols, cells })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if a coordinate lies inside the grid.
    #[must_use]
    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.rows && at.col < self.cols
    }

    /// Cell at `at`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, at: Coord) -> Option<Cell> {
        self.contains(at).then(|| self.cells[self.index(at)])
    }

    /// Overwrite the cell at `at`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, at: Coord, cell: Cell) {
        if self.contains(at) {
            let idx = self.index(at);
            self.cells[idx] = cell;
        }
    }

    /// Check if `at` is an in-bounds floor cell.
    #[must_use]
    pub fn is_floor(&self, at: Coord) -> bool {
        self.get(at) == Some(Cell::Floor)
    }

    /// Check if `at` lies on the outer ring.
    #[must_use]
    pub fn is_border(&self, at: Coord) -> bool {
        self.contains(at)
            && (at.row == 0 || at.col == 0 || at.row == self.rows - 1 || at.col == self.cols - 1)
    }

    /// In-bounds neighbor of `at` in `direction`.
    #[must_use]
    pub fn neighbor(&self, at: Coord, direction: Direction) -> Option<Coord> {
        at.step(direction).filter(|c| self.contains(*c))
    }

    /// Floor neighbors of `at`, in `Direction::ALL` order.
    #[must_use]
    pub fn floor_neighbors(&self, at: Coord) -> SmallVec<[Coord; 4]> {
        Direction::ALL
            .iter()
            .filter_map(|&d| self.neighbor(at, d))
            .filter(|&c| self.is_floor(c))
            .collect()
    }

    /// Iterate floor cells in row-major order.
    pub fn floor_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Floor)
            .map(|(idx, _)| Coord::new(idx / self.cols, idx % self.cols))
    }

    /// Number of floor cells.
    #[must_use]
    pub fn floor_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Floor).count()
    }

    /// Render as row strings.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }

    fn index(&self, at: Coord) -> usize {
        at.row * self.cols + at.col
    }
}

impl TryFrom<Vec<String>> for Grid {
    type Error = MazeError;

    fn try_from(lines: Vec<String>) -> Result<Self, Self::Error> {
        Self::parse(&lines)
    }
}

impl From<Grid> for Vec<String> {
    fn from(grid: Grid) -> Self {
        grid.to_lines()
    }
}
