//! The [`World`] type — a rectangular snapshot of automaton cell states.

use serde::{Deserialize, Serialize};

use crate::cell::CellState;

/// A 2D grid of boolean cell states (`true` = alive).
///
/// A `World` is a plain positional snapshot: rows and columns are indexed by
/// position and carry no identity of their own. It deserializes directly from
/// the server's `bool[][]` wire shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct World {
    rows: Vec<Vec<bool>>,
}

impl World {
    /// Create a snapshot from raw rows.
    pub fn new(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the first row (the snapshot is rectangular on
    /// the wire, but nothing here depends on that).
    #[inline]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Whether the snapshot has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Read the cell at column `x` of row `y`.
    ///
    /// Out-of-range positions read as dead, so lookups against a smaller
    /// previous snapshot stay total.
    #[inline]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| row.get(x).copied().unwrap_or(false))
    }

    /// Classify the cell at `(x, y)` against a previous snapshot.
    #[inline]
    pub fn classify_against(&self, previous: &World, x: usize, y: usize) -> CellState {
        CellState::classify(self.is_alive(x, y), previous.is_alive(x, y))
    }

    /// Iterator over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_lookup() {
        let w = World::new(vec![vec![true, false], vec![false, true]]);
        assert!(w.is_alive(0, 0));
        assert!(!w.is_alive(1, 0));
        assert!(w.is_alive(1, 1));
        assert_eq!(w.width(), 2);
        assert_eq!(w.height(), 2);
    }

    #[test]
    fn out_of_range_reads_dead() {
        let w = World::new(vec![vec![true]]);
        assert!(!w.is_alive(1, 0));
        assert!(!w.is_alive(0, 1));
        assert!(!w.is_alive(100, 100));
    }

    #[test]
    fn empty_world() {
        let w = World::default();
        assert!(w.is_empty());
        assert_eq!(w.height(), 0);
        assert_eq!(w.width(), 0);
        assert!(!w.is_alive(0, 0));
    }

    #[test]
    fn classification_over_equal_grids() {
        let curr = World::new(vec![vec![true, false], vec![false, false]]);
        let prev = World::new(vec![vec![true, true], vec![false, true]]);
        assert_eq!(curr.classify_against(&prev, 0, 0), CellState::Alive);
        assert_eq!(curr.classify_against(&prev, 1, 0), CellState::Died);
        assert_eq!(curr.classify_against(&prev, 0, 1), CellState::Empty);
        assert_eq!(curr.classify_against(&prev, 1, 1), CellState::Died);
    }

    #[test]
    fn classification_against_smaller_previous() {
        let curr = World::new(vec![vec![false, true], vec![false, false]]);
        let prev = World::new(vec![vec![false]]);
        // Missing previous rows and columns read as dead: no panic, and a
        // currently-dead cell with no history stays unmarked.
        assert_eq!(curr.classify_against(&prev, 1, 0), CellState::Alive);
        assert_eq!(curr.classify_against(&prev, 0, 1), CellState::Empty);
        assert_eq!(curr.classify_against(&prev, 1, 1), CellState::Empty);
    }

    #[test]
    fn wire_shape_is_nested_arrays() {
        let w: World = serde_json::from_str("[[true,false],[false,true]]").unwrap();
        assert_eq!(w, World::new(vec![vec![true, false], vec![false, true]]));
        assert_eq!(serde_json::to_string(&w).unwrap(), "[[true,false],[false,true]]");
    }
}
