//! Input model: which part of a card was pressed, and the gesture state machine.
//!
//! `CardPart` captures where a pointer-down landed on a card. `InputState` is
//! the active gesture tracked between pointer-down and pointer-up, carrying the
//! context needed to compute deltas from the gesture origin on every move.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::card::CardId;
use crate::geom::Point;

/// Anchor position for the eight resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeAnchor {
    /// Every handle a card exposes.
    pub const ALL: [ResizeAnchor; 8] = [
        ResizeAnchor::Nw,
        ResizeAnchor::N,
        ResizeAnchor::Ne,
        ResizeAnchor::E,
        ResizeAnchor::Se,
        ResizeAnchor::S,
        ResizeAnchor::Sw,
        ResizeAnchor::W,
    ];

    /// Compass name used in CSS class modifiers (`"nw"`, `"e"`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::Ne => "ne",
            Self::E => "e",
            Self::Se => "se",
            Self::S => "s",
            Self::Sw => "sw",
            Self::W => "w",
            Self::Nw => "nw",
        }
    }

    /// Whether dragging this handle moves the top edge.
    #[must_use]
    pub fn moves_top(self) -> bool {
        matches!(self, Self::N | Self::Ne | Self::Nw)
    }

    /// Whether dragging this handle moves the bottom edge.
    #[must_use]
    pub fn moves_bottom(self) -> bool {
        matches!(self, Self::S | Self::Se | Self::Sw)
    }

    /// Whether dragging this handle moves the left edge.
    #[must_use]
    pub fn moves_left(self) -> bool {
        matches!(self, Self::W | Self::Nw | Self::Sw)
    }

    /// Whether dragging this handle moves the right edge.
    #[must_use]
    pub fn moves_right(self) -> bool {
        matches!(self, Self::E | Self::Ne | Self::Se)
    }
}

/// Which part of a card received a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPart {
    /// The card body; starts a drag.
    Body,
    /// One of the resize handles; starts a resize.
    Handle(ResizeAnchor),
}

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving a card.
    DraggingCard {
        /// Id of the card being dragged.
        id: CardId,
        /// Pointer position at the start of the drag.
        start: Point,
        /// Card x at the start of the drag.
        orig_x: f64,
        /// Card y at the start of the drag.
        orig_y: f64,
    },
    /// The user is resizing a card by one of its eight handles.
    ResizingCard {
        /// Id of the card being resized.
        id: CardId,
        /// Which handle is being dragged.
        anchor: ResizeAnchor,
        /// Pointer position at the start of the resize.
        start: Point,
        /// Card x at the start of the resize.
        orig_x: f64,
        /// Card y at the start of the resize.
        orig_y: f64,
        /// Card width at the start of the resize.
        orig_w: f64,
        /// Card height at the start of the resize.
        orig_h: f64,
    },
}

impl InputState {
    /// Id of the card the active gesture targets, if any.
    #[must_use]
    pub fn target(&self) -> Option<CardId> {
        match self {
            Self::Idle => None,
            Self::DraggingCard { id, .. } | Self::ResizingCard { id, .. } => Some(*id),
        }
    }

    /// Returns `true` when no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
