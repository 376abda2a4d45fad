//! # boxgrid-layout
//!
//! Box-model layout onto a fixed-width character canvas: block,
//! inline-block and inline flow, padding and borders, text alignment and
//! word wrap.
//!
//! ## Architecture
//!
//! ```text
//! Element tree ──render (children first)──▸ LayoutEngine::apply_siblings
//!                                               │  flow: block / inline-block / inline
//!                                               ▼
//!                                           LayoutEngine::apply
//!                                               │  wrap ─▸ align ─▸ padding ─▸ border
//!                                               ▼
//!                                           CharacterGrid
//! ```
//!
//! - **`engine`** — `apply` and `apply_siblings`.
//! - **`matrix`** — merge, rectangle fill and hole filling on grids.
//! - **`wrap`** — word and break-all line breaking.
//! - **`align`** — left / center / right row padding.
//! - **`boxes`** — border and vertical padding rows.
//! - **`tree`** — `Node`, `Child`, `Element` and element kinds.
//! - **`config`** — glyphs used for borders and blanks.

pub mod align;
pub mod boxes;
pub mod config;
pub mod engine;
pub mod matrix;
pub mod tree;
pub mod wrap;

// Re-exports for ergonomic use.
pub use config::{Glyphs, LayoutConfig};
pub use engine::LayoutEngine;
pub use tree::{Child, Element, ElementKind, Node};
pub use wrap::LineBreaker;
