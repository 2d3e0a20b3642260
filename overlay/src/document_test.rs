use super::*;

// =============================================================
// FileType
// =============================================================

#[test]
fn default_file_type_is_pdf() {
    assert_eq!(FileType::default(), FileType::Pdf);
}

#[test]
fn toggled_switches_between_two_types() {
    assert_eq!(FileType::Pdf.toggled(), FileType::Xlsx);
    assert_eq!(FileType::Xlsx.toggled(), FileType::Pdf);
    assert_eq!(FileType::Pdf.toggled().toggled(), FileType::Pdf);
}

// =============================================================
// DocumentSources
// =============================================================

#[test]
fn pdf_uri_is_under_base_path() {
    let sources = DocumentSources::from_base_path("/static");
    assert_eq!(sources.uri_for(FileType::Pdf), "/static/c4611_sample_explain.pdf");
}

#[test]
fn base_path_trailing_slash_is_trimmed() {
    let sources = DocumentSources::from_base_path("/static/");
    assert_eq!(sources.uri_for(FileType::Pdf), "/static/c4611_sample_explain.pdf");
}

#[test]
fn empty_base_path_yields_root_relative_pdf() {
    let sources = DocumentSources::default();
    assert_eq!(sources.uri_for(FileType::Pdf), "/c4611_sample_explain.pdf");
}

#[test]
fn xlsx_uri_is_remote_sample() {
    let sources = DocumentSources::from_base_path("/anything");
    let uri = sources.uri_for(FileType::Xlsx);
    assert!(uri.starts_with("https://uploads.codesandbox.io/"));
    assert!(uri.ends_with(".xlsx"));
}

// =============================================================
// ViewerHeight
// =============================================================

#[test]
fn default_height_is_1800px() {
    assert_eq!(ViewerHeight::default().to_string(), "1800px");
}

#[test]
fn pdf_height_follows_measurement() {
    let h = ViewerHeight::from_measurement(FileType::Pdf, 2345.0);
    assert_eq!(h, ViewerHeight::Px(2345.0));
    assert_eq!(h.to_string(), "2345px");
}

#[test]
fn xlsx_height_is_fixed_viewport_share() {
    let h = ViewerHeight::from_measurement(FileType::Xlsx, 2345.0);
    assert_eq!(h.to_string(), "70vh");
}

// =============================================================
// Header / file name
// =============================================================

#[test]
fn file_name_strips_path_and_query() {
    assert_eq!(file_name("https://x.test/a/b/report.xlsx?token=1#p2", false), "report.xlsx");
}

#[test]
fn file_name_keeps_query_when_retained() {
    assert_eq!(file_name("https://x.test/a/report.xlsx?token=1", true), "report.xlsx?token=1");
}

#[test]
fn file_name_of_bare_name() {
    assert_eq!(file_name("sample.pdf", false), "sample.pdf");
}

#[test]
fn default_config_shows_file_name() {
    let config = ViewerConfig::default();
    assert_eq!(config.header_label("/static/c4611_sample_explain.pdf").as_deref(), Some("c4611_sample_explain.pdf"));
}

#[test]
fn disabled_header_hides_label() {
    let config = ViewerConfig { disable_header: true, ..Default::default() };
    assert!(config.header_label("/a.pdf").is_none());
    let config = ViewerConfig { disable_file_name: true, ..Default::default() };
    assert!(config.header_label("/a.pdf").is_none());
}

// =============================================================
// embed_url
// =============================================================

#[test]
fn pdf_embeds_directly() {
    assert_eq!(embed_url(FileType::Pdf, "/x.pdf"), "/x.pdf");
}

#[test]
fn xlsx_embeds_through_office_viewer_encoded() {
    let url = embed_url(FileType::Xlsx, "https://h.test/a b.xlsx");
    assert!(url.starts_with("https://view.officeapps.live.com/op/embed.aspx?src="));
    assert!(url.contains("https%3A%2F%2Fh%2Etest%2Fa%20b%2Exlsx"));
}
