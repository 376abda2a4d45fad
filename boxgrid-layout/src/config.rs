use serde::{Deserialize, Serialize};

/// Characters used to paint boxes and fill empty cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    /// Top and bottom border rows.
    pub horizontal: char,
    /// Left and right border columns.
    pub vertical: char,
    /// Border columns on border rows.
    pub corner: char,
    /// Padding, alignment and hole fill.
    pub blank: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            horizontal: '-',
            vertical: '|',
            corner: '+',
            blank: ' ',
        }
    }
}

/// Widest grid, in cells, the engine will lay out by default.
pub const DEFAULT_MAX_WIDTH: usize = 4096;

/// Layout engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub glyphs: Glyphs,
    /// Element and content widths above this are rejected before any row
    /// is allocated.
    pub max_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            glyphs: Glyphs::default(),
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}
