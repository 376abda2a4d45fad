//! Render tree: nodes, their children, and element kinds with default styles.
//!
//! ```text
//!  Element ──render──▸ LayoutEngine::apply_siblings ──▸ CharacterGrid
//!     │                        │
//!  children ◂──render──────────┘   (depth-first, children first)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use boxgrid_core::{CharacterGrid, LayoutError, ParentContext, ResolvedStyle, StyleSpec, Viewport};

use crate::engine::LayoutEngine;

/// Anything the engine can flow as a child.
pub trait Node: fmt::Debug {
    /// The node's style, already cascaded and resolved.
    fn style(&self) -> &ResolvedStyle;

    fn children(&self) -> &[Child];

    /// Render the node into a finished grid for a parent offering `parent`.
    fn render(
        &self,
        engine: &LayoutEngine,
        viewport: &Viewport,
        parent: &ParentContext,
    ) -> Result<CharacterGrid, LayoutError>;
}

/// A child of a node: literal text or a nested node.
#[derive(Debug)]
pub enum Child {
    Text(String),
    Node(Box<dyn Node>),
}

impl Child {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Node(_) => None,
        }
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Element> for Child {
    fn from(element: Element) -> Self {
        Self::Node(Box::new(element))
    }
}

// ───────────────────────────────────────────────────────────────────
// Element kinds
// ───────────────────────────────────────────────────────────────────

/// Built-in element kinds, each with a default style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    /// Block container.
    Div,
    /// Block with a blank line below it.
    Paragraph,
    /// Inline text.
    Span,
    /// Fixed-width box packed side by side with its siblings.
    InlineBox,
}

impl ElementKind {
    pub fn default_style(&self) -> StyleSpec {
        let value = match self {
            Self::Div => json!({ "display": "block", "textAlign": "left" }),
            Self::Paragraph => json!({ "display": "block", "textAlign": "left", "paddingBottom": 1 }),
            Self::Span => json!({ "display": "inline" }),
            Self::InlineBox => json!({ "display": "inline-block", "textAlign": "left" }),
        };
        StyleSpec::from_json(value)
    }
}

// ───────────────────────────────────────────────────────────────────
// Element
// ───────────────────────────────────────────────────────────────────

/// A styled node owning its children.
///
/// The style is fixed at construction: the kind's default style is merged
/// with the instance style (instance wins per key) and then resolved.
#[derive(Debug)]
pub struct Element {
    id: Uuid,
    style: ResolvedStyle,
    children: Vec<Child>,
}

impl Element {
    pub fn new(kind: ElementKind, style: StyleSpec, children: Vec<Child>) -> Self {
        Self::with_default_style(&kind.default_style(), &style, children)
    }

    /// Build an element for a custom kind described only by its default style.
    pub fn with_default_style(default: &StyleSpec, style: &StyleSpec, children: Vec<Child>) -> Self {
        Self {
            id: Uuid::new_v4(),
            style: StyleSpec::cascade(default, style).resolve(),
            children,
        }
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Append a child.
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl Node for Element {
    fn style(&self) -> &ResolvedStyle {
        &self.style
    }

    fn children(&self) -> &[Child] {
        &self.children
    }

    fn render(
        &self,
        engine: &LayoutEngine,
        viewport: &Viewport,
        parent: &ParentContext,
    ) -> Result<CharacterGrid, LayoutError> {
        log::debug!("render element {} (parent width {})", self.id, parent.width);
        engine.apply_siblings(&self.children, &self.style, viewport, parent)
    }
}
