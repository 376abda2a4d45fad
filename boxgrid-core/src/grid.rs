//! Character grids: the intermediate representation every layout step
//! consumes and produces.
//!
//! A [`CharacterGrid`] is a list of rows of `char`. Grids in the middle of a
//! layout pass may be ragged; a grid returned to a parent as a finished
//! child result is rectangular.
//!
//! A [`SparseGrid`] is the composition buffer used while flowing children:
//! cells that nothing has written yet are holes (`None`).

use std::fmt;

// ───────────────────────────────────────────────────────────────────
// CharacterGrid
// ───────────────────────────────────────────────────────────────────

/// Ordered rows of single characters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CharacterGrid {
    rows: Vec<Vec<char>>,
}

impl CharacterGrid {
    /// An empty grid (no rows).
    pub fn new() -> Self {
        Self::default()
    }

    /// A single-row grid holding the characters of `text`.
    pub fn from_text(text: &str) -> Self {
        Self {
            rows: vec![text.chars().collect()],
        }
    }

    pub fn from_rows(rows: Vec<Vec<char>>) -> Self {
        Self { rows }
    }

    /// One row per line of `text`, split on `\n`.
    pub fn from_lines(text: &str) -> Self {
        Self {
            rows: text.split('\n').map(|line| line.chars().collect()).collect(),
        }
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of row 0, which is the authoritative width of a finished
    /// grid. Zero for an empty grid.
    #[inline]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Length of the longest row.
    pub fn max_width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `true` when every row has the same length as row 0.
    pub fn is_rectangular(&self) -> bool {
        let width = self.width();
        self.rows.iter().all(|row| row.len() == width)
    }

    /// All characters, row after row, with no separator.
    pub fn concat(&self) -> Vec<char> {
        self.rows.iter().flatten().copied().collect()
    }

    /// Rows rendered as strings.
    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.iter().collect()).collect()
    }
}

impl fmt::Display for CharacterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl From<Vec<Vec<char>>> for CharacterGrid {
    fn from(rows: Vec<Vec<char>>) -> Self {
        Self { rows }
    }
}

// ───────────────────────────────────────────────────────────────────
// SparseGrid
// ───────────────────────────────────────────────────────────────────

/// A grid under composition. `None` cells are holes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseGrid {
    rows: Vec<Vec<Option<char>>>,
}

impl SparseGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Vec<Option<char>>>) -> Self {
        Self { rows }
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<Option<char>>] {
        &self.rows
    }

    #[inline]
    pub fn rows_mut(&mut self) -> &mut Vec<Vec<Option<char>>> {
        &mut self.rows
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of row 0 (holes included).
    #[inline]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn max_width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The cell at `(row, col)`; `None` for holes and out-of-range cells.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row).and_then(|r| r.get(col)).copied().flatten()
    }
}

impl From<&CharacterGrid> for SparseGrid {
    fn from(grid: &CharacterGrid) -> Self {
        Self {
            rows: grid
                .rows()
                .iter()
                .map(|row| row.iter().copied().map(Some).collect())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_is_single_row() {
        let grid = CharacterGrid::from_text("hello");
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.width(), 5);
        assert!(grid.is_rectangular());
    }

    #[test]
    fn test_display_joins_rows() {
        let grid = CharacterGrid::from_lines("ab\ncd");
        assert_eq!(grid.to_string(), "ab\ncd");
        assert_eq!(grid.lines(), vec!["ab".to_string(), "cd".to_string()]);
    }

    #[test]
    fn test_ragged_grid_detected() {
        let grid = CharacterGrid::from_lines("abc\nd");
        assert!(!grid.is_rectangular());
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.max_width(), 3);
    }

    #[test]
    fn test_empty_grid() {
        let grid = CharacterGrid::new();
        assert!(grid.is_empty());
        assert_eq!(grid.width(), 0);
        assert!(grid.is_rectangular());
        assert_eq!(grid.to_string(), "");
    }

    #[test]
    fn test_sparse_from_dense() {
        let sparse = SparseGrid::from(&CharacterGrid::from_text("ab"));
        assert_eq!(sparse.get(0, 1), Some('b'));
        assert_eq!(sparse.get(0, 2), None);
        assert_eq!(sparse.get(3, 0), None);
    }
}
