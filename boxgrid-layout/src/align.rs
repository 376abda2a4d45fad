//! Row alignment: pad every row to a target width.

use std::iter;

use boxgrid_core::{CharacterGrid, LayoutError, TextAlign};

/// Left and right padding that places a row of `len` cells in `width`.
///
/// For centering, an odd remainder puts the extra cell on the left.
pub fn padding(len: usize, width: usize, align: TextAlign) -> Result<(usize, usize), LayoutError> {
    let rest = width.checked_sub(len).ok_or_else(|| {
        LayoutError::invalid_input(format!("row of {len} cells does not fit in {width}"))
    })?;
    Ok(match align {
        TextAlign::Left => (0, rest),
        TextAlign::Right => (rest, 0),
        TextAlign::Center => {
            let half = rest / 2;
            (half + rest % 2, half)
        }
    })
}

/// Pad each row of `grid` to exactly `width` cells with `blank`.
pub fn align(
    grid: &CharacterGrid,
    width: usize,
    mode: TextAlign,
    blank: char,
) -> Result<CharacterGrid, LayoutError> {
    let rows = grid
        .rows()
        .iter()
        .map(|row| {
            let (left, right) = padding(row.len(), width, mode)?;
            let mut line = Vec::with_capacity(width);
            line.extend(iter::repeat(blank).take(left));
            line.extend_from_slice(row);
            line.extend(iter::repeat(blank).take(right));
            Ok(line)
        })
        .collect::<Result<Vec<_>, LayoutError>>()?;
    Ok(CharacterGrid::from_rows(rows))
}
