//! Overlay card: one shape descriptor in the panel's list.
//!
//! A card is created when the user adds a shape, removed when they delete
//! it, and mutated in place while it is dragged, resized or edited.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{DEFAULT_CARD_HEIGHT, DEFAULT_CARD_TEXT, DEFAULT_CARD_WIDTH, MIN_CARD_SIZE};
use crate::input::ResizeAnchor;
use crate::shape::ShapeKind;

/// Stable identifier for a card; used as the render key.
pub type CardId = Uuid;

/// Position and size of a card, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A draggable, resizable, editable shape overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayCard {
    /// Unique identifier for this card.
    pub id: CardId,
    /// Visual shape.
    pub kind: ShapeKind,
    /// Free-form text shown in the card's text area.
    pub text: String,
    /// Drag offset from the card's home position, x axis.
    pub x: f64,
    /// Drag offset from the card's home position, y axis.
    pub y: f64,
    /// Box width.
    pub width: f64,
    /// Box height.
    pub height: f64,
    /// Set between drag start and drag stop.
    #[serde(default)]
    pub dragging: bool,
}

impl OverlayCard {
    /// A fresh card of `kind` with default text, size and position.
    #[must_use]
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            text: DEFAULT_CARD_TEXT.to_owned(),
            x: 0.0,
            y: 0.0,
            width: DEFAULT_CARD_WIDTH,
            height: DEFAULT_CARD_HEIGHT,
            dragging: false,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds { x: self.x, y: self.y, width: self.width, height: self.height }
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.x = bounds.x;
        self.y = bounds.y;
        self.width = bounds.width;
        self.height = bounds.height;
    }

    /// Inline style positioning and sizing the card container.
    #[must_use]
    pub fn box_style(&self) -> String {
        format!(
            "transform: translate({}px, {}px); width: {}px; height: {}px; {}",
            self.x,
            self.y,
            self.width,
            self.height,
            self.kind.clip_style()
        )
    }
}

/// Apply a resize of `(dx, dy)` through `anchor` to `orig`.
///
/// Edges not owned by the anchor stay fixed. Width and height are clamped to
/// [`MIN_CARD_SIZE`]; when the moving edge is top or left the clamp keeps the
/// opposite edge where it was.
#[must_use]
pub fn resize_bounds(orig: Bounds, anchor: ResizeAnchor, dx: f64, dy: f64) -> Bounds {
    let mut out = orig;

    if anchor.moves_right() {
        out.width = (orig.width + dx).max(MIN_CARD_SIZE);
    }
    if anchor.moves_left() {
        out.width = (orig.width - dx).max(MIN_CARD_SIZE);
        out.x = orig.x + orig.width - out.width;
    }
    if anchor.moves_bottom() {
        out.height = (orig.height + dy).max(MIN_CARD_SIZE);
    }
    if anchor.moves_top() {
        out.height = (orig.height - dy).max(MIN_CARD_SIZE);
        out.y = orig.y + orig.height - out.height;
    }

    out
}
