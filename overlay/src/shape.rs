//! Shape kinds an overlay card can take, and how each one is clipped.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// The visual shape of an overlay card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Plain rectangle; no clipping.
    #[default]
    Square,
    /// Ellipse inscribed in the card's box.
    Circle,
    /// Upward-pointing triangle with its apex at the top-center.
    Triangle,
}

impl ShapeKind {
    /// Every kind, in palette order.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Square, ShapeKind::Circle, ShapeKind::Triangle];

    /// Lowercase name used for labels and CSS modifiers.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Circle => "circle",
            Self::Triangle => "triangle",
        }
    }

    /// The kind after this one in palette order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Square => Self::Circle,
            Self::Circle => Self::Triangle,
            Self::Triangle => Self::Square,
        }
    }

    /// Inline CSS declarations that clip a box to this shape.
    ///
    /// Applied to both the card container and its text area so the editable
    /// region follows the outline.
    #[must_use]
    pub fn clip_style(self) -> &'static str {
        match self {
            Self::Square => "",
            Self::Circle => "border-radius: 50%;",
            Self::Triangle => "clip-path: polygon(50% 0%, 0% 100%, 100% 100%);",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
