//! Box edges: border rows and columns, vertical padding rows.
//!
//! Horizontal padding is only a width reservation taken out of the content
//! width by the engine; it is not painted here.

use std::iter;

use boxgrid_core::{CharacterGrid, Edges};

use crate::config::Glyphs;

/// Wrap `grid` in a border.
///
/// Top and bottom rows are `content_width` horizontal glyphs. Left and right
/// columns are added afterwards, with corner glyphs on border rows.
pub fn render_border(
    grid: &CharacterGrid,
    content_width: usize,
    border: &Edges,
    glyphs: &Glyphs,
) -> CharacterGrid {
    let horizontal = vec![glyphs.horizontal; content_width];
    let mut rows: Vec<Vec<char>> = Vec::with_capacity(grid.height() + border.vertical());
    rows.extend(iter::repeat(horizontal.clone()).take(border.top));
    rows.extend(grid.rows().iter().cloned());
    rows.extend(iter::repeat(horizontal).take(border.bottom));

    if border.left == 0 && border.right == 0 {
        return CharacterGrid::from_rows(rows);
    }

    let height = rows.len();
    let rows = rows
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let is_border_row = i < border.top || i >= height - border.bottom;
            let side = if is_border_row { glyphs.corner } else { glyphs.vertical };
            let mut framed = Vec::with_capacity(line.len() + border.horizontal());
            framed.extend(iter::repeat(side).take(border.left));
            framed.extend(line);
            framed.extend(iter::repeat(side).take(border.right));
            framed
        })
        .collect();
    CharacterGrid::from_rows(rows)
}

/// Add `top` blank rows above and `bottom` blank rows below `grid`.
pub fn render_padding(
    grid: &CharacterGrid,
    content_width: usize,
    top: usize,
    bottom: usize,
    blank: char,
) -> CharacterGrid {
    let empty = vec![blank; content_width];
    let mut rows = Vec::with_capacity(grid.height() + top + bottom);
    rows.extend(iter::repeat(empty.clone()).take(top));
    rows.extend(grid.rows().iter().cloned());
    rows.extend(iter::repeat(empty).take(bottom));
    CharacterGrid::from_rows(rows)
}
