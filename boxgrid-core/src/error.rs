use thiserror::Error;

/// Failures raised while resolving styles or laying out a node.
///
/// Errors are never recovered inside the engine: a failure in a child
/// aborts the render of every ancestor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Style value \"{value}\" not supported for '{property}'")]
    UnsupportedStyleValue {
        property: String,
        value: String,
    },

    #[error("Invalid style value for '{property}': {reason}")]
    InvalidStyleValue {
        property: String,
        reason: String,
    },

    #[error("Invalid layout input: {0}")]
    InvalidLayoutInput(String),
}

impl LayoutError {
    pub(crate) fn unsupported(property: &str, value: impl Into<String>) -> Self {
        Self::UnsupportedStyleValue {
            property: property.to_string(),
            value: value.into(),
        }
    }

    pub(crate) fn invalid_value(property: &str, reason: impl Into<String>) -> Self {
        Self::InvalidStyleValue {
            property: property.to_string(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`LayoutError::InvalidLayoutInput`].
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidLayoutInput(reason.into())
    }
}
