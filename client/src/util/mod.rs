//! Browser helpers shared by components.

pub mod measure;
pub mod pointer;
