//! Style specifications, shorthand resolution and default-style cascade.
//!
//! A [`StyleSpec`] is a flat map of camelCase property names to JSON
//! values, the same shape a CSS-in-JS style object has. Keyword and number
//! properties are read back through typed accessors on [`ResolvedStyle`].
//!
//! ```text
//!  DefaultStyle ─┐
//!                ├─ cascade ──▸ StyleSpec ── resolve ──▸ ResolvedStyle
//!  instance ─────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::LayoutError;

// ───────────────────────────────────────────────────────────────────
// Keywords
// ───────────────────────────────────────────────────────────────────

/// Outer display type of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Display {
    Block,
    InlineBlock,
    Inline,
}

impl Display {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::InlineBlock => "inline-block",
            Self::Inline => "inline",
        }
    }
}

impl FromStr for Display {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "block" => Ok(Self::Block),
            "inline-block" => Ok(Self::InlineBlock),
            "inline" => Ok(Self::Inline),
            other => Err(LayoutError::unsupported(DISPLAY, other)),
        }
    }
}

/// Horizontal alignment of each content row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl FromStr for TextAlign {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(LayoutError::unsupported(TEXT_ALIGN, other)),
        }
    }
}

/// Line breaking mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WordWrap {
    /// Break at spaces, splitting words only when they do not fit.
    #[default]
    Normal,
    /// Break anywhere, filling every line.
    BreakAll,
}

impl WordWrap {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::BreakAll => "break-all",
        }
    }
}

impl FromStr for WordWrap {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "break-all" => Ok(Self::BreakAll),
            other => Err(LayoutError::unsupported(WORD_WRAP, other)),
        }
    }
}

/// A shorthand property that expands to four edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeFamily {
    Padding,
    Border,
    Margin,
}

impl EdgeFamily {
    pub const ALL: [EdgeFamily; 3] = [Self::Padding, Self::Border, Self::Margin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Padding => "padding",
            Self::Border => "border",
            Self::Margin => "margin",
        }
    }

    /// Per-edge property name, e.g. `paddingLeft`.
    pub fn key(&self, edge: Edge) -> String {
        format!("{}{}", self.as_str(), edge.suffix())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Bottom => "Bottom",
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

/// Resolved widths of the four edges of one family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Edges {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl Edges {
    #[inline]
    pub fn horizontal(&self) -> usize {
        self.left + self.right
    }

    #[inline]
    pub fn vertical(&self) -> usize {
        self.top + self.bottom
    }
}

// Property names read by the engine.
pub const DISPLAY: &str = "display";
pub const WIDTH: &str = "width";
pub const TEXT_ALIGN: &str = "textAlign";
pub const WORD_WRAP: &str = "wordWrap";

// ───────────────────────────────────────────────────────────────────
// StyleSpec
// ───────────────────────────────────────────────────────────────────

/// Property name → value mapping, as written by the user or a node kind.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSpec(Map<String, Value>);

impl StyleSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON object. Any other JSON value yields an empty spec.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            other => {
                log::warn!("StyleSpec: expected a JSON object, got {other}");
                Self::default()
            }
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, property: &str, value: impl Into<Value>) -> Self {
        self.0.insert(property.to_string(), value.into());
        self
    }

    #[inline]
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.0.get(property)
    }

    #[inline]
    pub fn contains(&self, property: &str) -> bool {
        self.0.contains_key(property)
    }

    pub fn remove(&mut self, property: &str) -> Option<Value> {
        self.0.remove(property)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn properties(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Single-level, key-by-key merge: every key of `instance` overrides
    /// the same key of `default`. Nested values are replaced, not merged.
    pub fn cascade(default: &StyleSpec, instance: &StyleSpec) -> StyleSpec {
        let mut merged = default.0.clone();
        for (key, value) in &instance.0 {
            merged.insert(key.clone(), value.clone());
        }
        StyleSpec(merged)
    }

    /// Expand `padding`, `border` and `margin` shorthands into their edges.
    ///
    /// An edge keeps its own value when it is truthy; otherwise it takes
    /// the shorthand value when that is truthy. The shorthand key is
    /// dropped. A zero edge and an absent edge behave the same.
    pub fn resolve(&self) -> ResolvedStyle {
        let mut resolved = self.0.clone();
        for family in EdgeFamily::ALL {
            let master = resolved.get(family.as_str()).cloned();
            for edge in Edge::ALL {
                let key = family.key(edge);
                let own_set = resolved.get(&key).is_some_and(is_truthy);
                match &master {
                    Some(value) if !own_set && is_truthy(value) => {
                        resolved.insert(key, value.clone());
                    }
                    _ => {}
                }
            }
            resolved.remove(family.as_str());
        }
        ResolvedStyle(StyleSpec(resolved))
    }
}

impl From<Map<String, Value>> for StyleSpec {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl fmt::Display for StyleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.0.clone()))
    }
}

// ───────────────────────────────────────────────────────────────────
// ResolvedStyle
// ───────────────────────────────────────────────────────────────────

/// A [`StyleSpec`] with every shorthand expanded.
///
/// Unset edges read as `0`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedStyle(StyleSpec);

impl ResolvedStyle {
    #[inline]
    pub fn spec(&self) -> &StyleSpec {
        &self.0
    }

    #[inline]
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.0.get(property)
    }

    /// Width of one edge; absent or `null` reads as 0.
    pub fn edge(&self, family: EdgeFamily, edge: Edge) -> Result<usize, LayoutError> {
        let key = family.key(edge);
        match self.0.get(&key) {
            None | Some(Value::Null) => Ok(0),
            Some(value) => value_to_usize(&key, value),
        }
    }

    pub fn edges(&self, family: EdgeFamily) -> Result<Edges, LayoutError> {
        Ok(Edges {
            top: self.edge(family, Edge::Top)?,
            bottom: self.edge(family, Edge::Bottom)?,
            left: self.edge(family, Edge::Left)?,
            right: self.edge(family, Edge::Right)?,
        })
    }

    /// Explicit element width. `None` when unset or zero.
    pub fn width(&self) -> Result<Option<usize>, LayoutError> {
        match self.0.get(WIDTH) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value_to_usize(WIDTH, value).map(|w| (w > 0).then_some(w)),
        }
    }

    /// Display type; `inline` when unset.
    pub fn display(&self) -> Result<Display, LayoutError> {
        match self.0.get(DISPLAY) {
            None | Some(Value::Null) => Ok(Display::Inline),
            Some(value) => keyword(DISPLAY, value)?.parse(),
        }
    }

    /// Text alignment. Unset is an error, never a silent default.
    pub fn text_align(&self) -> Result<TextAlign, LayoutError> {
        match self.0.get(TEXT_ALIGN) {
            None | Some(Value::Null) => Err(LayoutError::unsupported(TEXT_ALIGN, "unset")),
            Some(value) => keyword(TEXT_ALIGN, value)?.parse(),
        }
    }

    /// Wrap mode. Anything other than `break-all` wraps on words.
    pub fn word_wrap(&self) -> WordWrap {
        match self.0.get(WORD_WRAP) {
            None | Some(Value::Null) => WordWrap::Normal,
            Some(Value::String(s)) => s.parse().unwrap_or_else(|e| {
                log::warn!("{e}; wrapping on words");
                WordWrap::Normal
            }),
            Some(other) => {
                log::warn!("wordWrap: expected a keyword, got {other}; wrapping on words");
                WordWrap::Normal
            }
        }
    }
}

impl From<StyleSpec> for ResolvedStyle {
    fn from(spec: StyleSpec) -> Self {
        spec.resolve()
    }
}

impl fmt::Display for ResolvedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ───────────────────────────────────────────────────────────────────
// Helpers
// ───────────────────────────────────────────────────────────────────

/// JavaScript-style truthiness of a style value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_to_usize(property: &str, value: &Value) -> Result<usize, LayoutError> {
    if let Some(v) = value.as_u64() {
        return usize::try_from(v)
            .map_err(|_| LayoutError::invalid_value(property, format!("{v} is out of range")));
    }
    match value.as_f64() {
        Some(v) if v >= 0.0 && v.fract() == 0.0 && v <= usize::MAX as f64 => Ok(v as usize),
        _ => Err(LayoutError::invalid_value(
            property,
            format!("expected a non-negative integer, got {value}"),
        )),
    }
}

fn keyword<'a>(property: &str, value: &'a Value) -> Result<&'a str, LayoutError> {
    value
        .as_str()
        .ok_or_else(|| LayoutError::invalid_value(property, format!("expected a keyword, got {value}")))
}
