//! Grid algebra used while composing sibling grids.
//!
//! Every operation takes its inputs by reference and returns a freshly
//! owned grid; nothing here mutates or aliases a caller's grid.

use boxgrid_core::{CharacterGrid, LayoutError, SparseGrid};

/// Copy every cell of `origin` into a copy of `dest` with `origin`'s top-left
/// corner at `(row, col)`.
///
/// Rows and columns grow as needed; cells skipped over while growing are
/// left as holes. Cells of `dest` outside the written area are kept.
pub fn merge(
    dest: &SparseGrid,
    origin: &CharacterGrid,
    row: usize,
    col: usize,
) -> Result<SparseGrid, LayoutError> {
    if !origin.is_rectangular() {
        return Err(LayoutError::invalid_input(format!(
            "merge origin must be rectangular (row 0 is {} wide, widest row is {})",
            origin.width(),
            origin.max_width()
        )));
    }

    let mut result = dest.clone();
    let rows = result.rows_mut();
    let width = origin.width();

    for (offset, source) in origin.rows().iter().enumerate() {
        let target = row + offset;
        if rows.len() <= target {
            rows.resize_with(target + 1, Vec::new);
        }
        let line = &mut rows[target];
        if line.len() < col + width {
            line.resize(col + width, None);
        }
        for (cell, &c) in line[col..col + width].iter_mut().zip(source) {
            *cell = Some(c);
        }
    }

    Ok(result)
}

/// Set every cell of the half-open rectangle `[r0, r1) × [c0, c1)` to `blank`.
pub fn fill_rect(
    grid: &SparseGrid,
    r0: usize,
    c0: usize,
    r1: usize,
    c1: usize,
    blank: char,
) -> Result<SparseGrid, LayoutError> {
    if r0 > r1 || c0 > c1 {
        return Err(LayoutError::invalid_input(format!(
            "fill rectangle ({r0}, {c0})..({r1}, {c1}) is inverted"
        )));
    }
    if r1 > grid.height() {
        return Err(LayoutError::invalid_input(format!(
            "fill rectangle ends at row {r1} but the grid has {} rows",
            grid.height()
        )));
    }

    let mut result = grid.clone();
    for line in &mut result.rows_mut()[r0..r1] {
        if line.len() < c1 {
            line.resize(c1, None);
        }
        for cell in &mut line[c0..c1] {
            *cell = Some(blank);
        }
    }
    Ok(result)
}

/// Replace holes with `blank`, padding every row out to row 0's length.
///
/// Row 0 is authoritative: rows longer than it keep their extra cells
/// (holes among them are blanked too) and are never truncated.
pub fn normalize_holes(grid: &SparseGrid, blank: char) -> CharacterGrid {
    let width = grid.width();
    let rows = grid
        .rows()
        .iter()
        .map(|line| {
            let len = line.len().max(width);
            (0..len)
                .map(|i| line.get(i).copied().flatten().unwrap_or(blank))
                .collect()
        })
        .collect();
    CharacterGrid::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> CharacterGrid {
        CharacterGrid::from_lines(text)
    }

    // ─────────────── merge ───────────────

    #[test]
    fn test_merge_into_empty() {
        let merged = merge(&SparseGrid::new(), &grid("ab\ncd"), 0, 0).unwrap();
        assert_eq!(normalize_holes(&merged, ' '), grid("ab\ncd"));
    }

    #[test]
    fn test_merge_at_offset_leaves_holes() {
        let merged = merge(&SparseGrid::new(), &grid("xy"), 1, 2).unwrap();
        assert_eq!(merged.height(), 2);
        assert!(merged.rows()[0].is_empty());
        assert_eq!(merged.rows()[1], vec![None, None, Some('x'), Some('y')]);
    }

    #[test]
    fn test_merge_keeps_uncovered_cells() {
        let dest = SparseGrid::from(&grid("abcd\nefgh"));
        let merged = merge(&dest, &grid("X"), 0, 1).unwrap();
        assert_eq!(normalize_holes(&merged, ' '), grid("aXcd\nefgh"));
    }

    #[test]
    fn test_merge_does_not_mutate_dest() {
        let dest = SparseGrid::from(&grid("ab"));
        let before = dest.clone();
        let _ = merge(&dest, &grid("zz\nzz"), 0, 1).unwrap();
        assert_eq!(dest, before);
    }

    #[test]
    fn test_merge_rejects_ragged_origin() {
        let result = merge(&SparseGrid::new(), &grid("abc\nd"), 0, 0);
        assert!(matches!(result, Err(LayoutError::InvalidLayoutInput(_))));
    }

    // ─────────────── fill_rect ───────────────

    #[test]
    fn test_fill_rect_pads_short_rows() {
        let dest = SparseGrid::from(&grid("ab\nc"));
        let filled = fill_rect(&dest, 0, 2, 2, 4, '.').unwrap();
        assert_eq!(normalize_holes(&filled, ' '), grid("ab..\nc .."));
    }

    #[test]
    fn test_fill_rect_overwrites_cells() {
        let dest = SparseGrid::from(&grid("abc"));
        let filled = fill_rect(&dest, 0, 0, 1, 2, ' ').unwrap();
        assert_eq!(normalize_holes(&filled, ' '), grid("  c"));
    }

    #[test]
    fn test_fill_rect_empty_range_is_identity() {
        let dest = SparseGrid::from(&grid("abc"));
        assert_eq!(fill_rect(&dest, 0, 3, 1, 3, ' ').unwrap(), dest);
    }

    #[test]
    fn test_fill_rect_out_of_bounds() {
        let dest = SparseGrid::from(&grid("abc"));
        assert!(fill_rect(&dest, 0, 0, 2, 1, ' ').is_err());
        assert!(fill_rect(&dest, 1, 0, 0, 1, ' ').is_err());
    }

    // ─────────────── normalize_holes ───────────────

    #[test]
    fn test_normalize_uses_row_zero_width() {
        let sparse = SparseGrid::from_rows(vec![
            vec![Some('a'), Some('b'), Some('c')],
            vec![Some('d')],
            vec![None, Some('e')],
        ]);
        assert_eq!(normalize_holes(&sparse, '.'), grid("abc\nd..\n.e."));
    }

    #[test]
    fn test_normalize_keeps_longer_rows() {
        let sparse = SparseGrid::from_rows(vec![
            vec![Some('a')],
            vec![Some('b'), None, Some('c')],
        ]);
        assert_eq!(normalize_holes(&sparse, ' '), grid("a\nb c"));
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize_holes(&SparseGrid::new(), ' ').is_empty());
    }
}
