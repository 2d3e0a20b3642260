use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn empty_environment_uses_defaults() {
    let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.public_dir, PathBuf::from("public"));
    assert_eq!(config.public_url, "");
}

#[test]
fn all_variables_are_read() {
    let config = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("PUBLIC_DIR", "/srv/docpanel"),
        ("PUBLIC_URL", "/static"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.public_dir, PathBuf::from("/srv/docpanel"));
    assert_eq!(config.public_url, "/static");
}

// =============================================================
// PORT
// =============================================================

#[test]
fn blank_port_falls_back_to_default() {
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn invalid_port_is_rejected() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
    assert!(err.to_string().contains("eighty"));
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(parse_port(Some("70000")).is_err());
}

// =============================================================
// PUBLIC_URL
// =============================================================

#[test]
fn base_path_trailing_slashes_are_trimmed() {
    assert_eq!(normalize_base_path(Some("/static/")).unwrap(), "/static");
}

#[test]
fn root_base_path_becomes_empty() {
    assert_eq!(normalize_base_path(Some("/")).unwrap(), "");
}

#[test]
fn relative_base_path_is_rejected() {
    let err = normalize_base_path(Some("static")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBasePath(ref p) if p == "static"));
}

#[test]
fn invalid_public_url_fails_whole_config() {
    assert!(ServerConfig::from_lookup(lookup_from(&[("PUBLIC_URL", "https://cdn.test/x")])).is_err());
}
