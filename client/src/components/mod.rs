//! Page building blocks.

pub mod document_viewer;
pub mod file_type_footer;
pub mod overlay_card;
pub mod shape_buttons;
