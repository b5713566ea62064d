//! Item colors and compact color sets.
//!
//! ## Color
//!
//! The palette is closed: five colors, each keying exactly one key, one
//! door and one book in a maze. A closed enum makes "door with no
//! matching key color" unrepresentable at the type level; the maze
//! constructor enforces the remaining per-color invariants.
//!
//! ## ColorSet
//!
//! Bitmask over the palette. `Copy`, hashable and ordered, so it can be
//! part of a search state without allocation. Iteration always yields
//! colors in palette order, which keeps serialized output stable.

use serde::{Deserialize, Serialize};

/// A key/door/book color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Orange,
    Green,
    Purple,
    Red,
}

impl Color {
    /// The full palette, in placement order.
    pub const PALETTE: [Color; 5] = [
        Color::Blue,
        Color::Orange,
        Color::Green,
        Color::Purple,
        Color::Red,
    ];

    /// Bit index within a `ColorSet`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Lowercase name, as used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Red => "red",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of colors, stored as a bitmask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Color>", into = "Vec<Color>")]
pub struct ColorSet(u8);

impl ColorSet {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// The first `count` palette colors (clamped to the palette size).
    #[must_use]
    pub fn first(count: usize) -> Self {
        Color::PALETTE.iter().take(count).copied().collect()
    }

    /// Check membership.
    #[must_use]
    pub const fn contains(self, color: Color) -> bool {
        self.0 & (1 << color.index()) != 0
    }

    /// Add a color. Returns true if it was not already present.
    pub fn insert(&mut self, color: Color) -> bool {
        let had = self.contains(color);
        self.0 |= 1 << color.index();
        !had
    }

    /// Copy of this set with `color` added.
    #[must_use]
    pub const fn with(self, color: Color) -> Self {
        Self(self.0 | (1 << color.index()))
    }

    /// Number of colors in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if every color in `other` is also in `self`.
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Iterate colors in palette order.
    pub fn iter(self) -> impl Iterator<Item = Color> {
        Color::PALETTE.into_iter().filter(move |c| self.contains(*c))
    }

    /// Colors as a vector, in palette order.
    #[must_use]
    pub fn to_vec(self) -> Vec<Color> {
        self.iter().collect()
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut set = ColorSet::empty();
        for color in iter {
            set.insert(color);
        }
        set
    }
}

impl From<Vec<Color>> for ColorSet {
    fn from(colors: Vec<Color>) -> Self {
        colors.into_iter().collect()
    }
}

impl From<ColorSet> for Vec<Color> {
    fn from(set: ColorSet) -> Self {
        set.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut set = ColorSet::empty();
        assert!(set.is_empty());

        assert!(set.insert(Color::Green));
        assert!(!set.insert(Color::Green)); // Already present
        assert!(set.contains(Color::Green));
        assert!(!set.contains(Color::Blue));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_first() {
        let set = ColorSet::first(3);
        assert_eq!(set.to_vec(), vec![Color::Blue, Color::Orange, Color::Green]);

        assert_eq!(ColorSet::first(0), ColorSet::empty());
        assert_eq!(ColorSet::first(99).len(), 5);
    }

    #[test]
    fn test_superset() {
        let all = ColorSet::first(5);
        let some = ColorSet::empty().with(Color::Red).with(Color::Blue);

        assert!(all.is_superset(some));
        assert!(!some.is_superset(all));
        assert!(some.is_superset(ColorSet::empty()));
    }

    #[test]
    fn test_iteration_is_palette_ordered() {
        let set: ColorSet = vec![Color::Red, Color::Blue, Color::Purple].into();
        assert_eq!(set.to_vec(), vec![Color::Blue, Color::Purple, Color::Red]);
    }

    #[test]
    fn test_serializes_as_list() {
        let set = ColorSet::empty().with(Color::Orange).with(Color::Blue);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[\"blue\",\"orange\"]");

        let back: ColorSet = serde_json::from_str("[\"orange\",\"blue\",\"blue\"]").unwrap();
        assert_eq!(back, set);
    }
}
