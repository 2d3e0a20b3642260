//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The page has a single state owner, `overlay::PanelCore`, held in an
//! `RwSignal` and provided through context. This module builds the initial
//! value and logs what panel operations report.

pub mod panel;
