//! Route-level pages.

pub mod viewer;
