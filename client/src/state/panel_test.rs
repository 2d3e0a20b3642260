use overlay::document::FileType;
use overlay::shape::ShapeKind;

use super::*;

#[test]
fn initial_panel_starts_on_pdf_with_no_shapes() {
    let panel = initial_panel();
    assert_eq!(panel.file_type(), FileType::Pdf);
    assert!(panel.is_empty());
    assert!(panel.current_uri().ends_with("/c4611_sample_explain.pdf"));
}

#[test]
fn panel_for_base_path_prefixes_pdf() {
    let panel = panel_for_base_path("/docs/");
    assert_eq!(panel.current_uri(), "/docs/c4611_sample_explain.pdf");
}

#[test]
fn viewer_header_shows_file_name_only() {
    let panel = panel_for_base_path("");
    assert_eq!(panel.config(), VIEWER_CONFIG);
    assert_eq!(panel.config().header_label("/c4611_sample_explain.pdf?v=2").as_deref(), Some("c4611_sample_explain.pdf"));
}

#[test]
fn describe_action_is_tagged_json() {
    let text = describe_action(&Action::ShapesCleared);
    assert_eq!(text, r#"{"action":"shapes_cleared"}"#);
}

#[test]
fn describe_action_includes_fields() {
    let mut panel = initial_panel();
    let actions = panel.toggle_file_type();
    let text = describe_action(&actions[0]);
    assert!(text.contains(r#""action":"document_changed""#));
    assert!(text.contains(r#""file_type":"xlsx""#));
}

#[test]
fn logging_helpers_accept_any_input() {
    let mut panel = initial_panel();
    panel.add_shape(ShapeKind::Circle);
    log_actions(&panel.toggle_file_type());
    log_rejected("select", &PanelError::IndexOutOfRange { index: 1, len: 0 });
}
