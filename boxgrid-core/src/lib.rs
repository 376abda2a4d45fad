//! # boxgrid-core
//!
//! Data model shared by the boxgrid layout crates: character grids, style
//! specifications with shorthand resolution and default-style cascade, the
//! context a parent hands to its children, and the error type.
//!
//! - **`grid`** — [`CharacterGrid`] and the composition buffer [`SparseGrid`].
//! - **`style`** — [`StyleSpec`], [`ResolvedStyle`], keyword enums.
//! - **`error`** — [`LayoutError`].

use serde::{Deserialize, Serialize};

pub mod error;
pub mod grid;
pub mod style;

pub use error::LayoutError;
pub use grid::{CharacterGrid, SparseGrid};
pub use style::{
    Display, Edge, EdgeFamily, Edges, ResolvedStyle, StyleSpec, TextAlign, WordWrap,
};

/// What a parent tells a child about the space it may occupy.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct ParentContext {
    /// Content width available to the child, in cells.
    pub width: usize,
}

impl ParentContext {
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

/// The canvas a render pass targets. Passed down the tree untouched.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Context for the root node: the whole viewport width.
    pub fn root_context(&self) -> ParentContext {
        ParentContext::new(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_context_uses_viewport_width() {
        let viewport = Viewport::new(80, 24);
        assert_eq!(viewport.root_context(), ParentContext { width: 80 });
    }

    #[test]
    fn test_parent_context_deserializes() {
        let ctx: ParentContext = serde_json::from_str(r#"{"width":12}"#).unwrap();
        assert_eq!(ctx.width, 12);
    }
}
