//! Headless model for the document viewer page and its shape overlays.
//!
//! This crate owns all state and logic that does not need a browser: the
//! shape kinds and their clipping rules, overlay cards with drag/resize/text
//! state, the pointer gesture state machine, the document sources and
//! viewer-height rule, and the render gate that keeps the embedded viewer
//! from being rebuilt for an unchanged URI. The `client` crate holds a
//! [`panel::PanelCore`] in a reactive signal and forwards DOM events to it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`panel`] | Top-level [`panel::PanelCore`]: card list, selection, file type |
//! | [`card`] | Overlay card descriptor and in-place mutations |
//! | [`shape`] | Shape kinds and their CSS clipping rules |
//! | [`input`] | Card parts, resize anchors and the gesture state machine |
//! | [`document`] | File types, document sources, viewer height and header config |
//! | [`render_gate`] | URI memo deciding when the viewer must re-render |
//! | [`geom`] | Points |
//! | [`consts`] | Shared constants (default sizes, default text, URIs) |

pub mod card;
pub mod consts;
pub mod document;
pub mod geom;
pub mod input;
pub mod panel;
pub mod render_gate;
pub mod shape;

pub use panel::{Action, PanelCore, PanelError};
