use std::fs;

use fieldguide_registry::{CatalogError, GuideCatalog, GuideSettings};

fn load_overlay() -> GuideCatalog {
    let json = include_str!("data/overlay.json");
    GuideCatalog::from_json_str(json).expect("load overlay fixture")
}

#[test]
fn overlay_replaces_builtin_entries_and_default() {
    let mut catalog = GuideCatalog::builtin().clone();
    let builtin_len = catalog.len();
    catalog.merge(load_overlay());

    let gemini = catalog.lookup("google_gemini", "apiKey").expect("gemini key present");
    assert_eq!(gemini.title, "Gemini key from the shared vault");
    assert_eq!(gemini.security_warning, Some(true));
    assert!(catalog.has_entry("google_gemini", "model"), "sibling entries survive the merge");
    assert!(catalog.has_entry("internal_crm", "tenantId"));
    assert_eq!(catalog.len(), builtin_len + 1);
    assert_eq!(catalog.default_guide().title, "Ask your workspace admin");
}

#[test]
fn overlay_node_types_are_appended_in_order() {
    let mut catalog = GuideCatalog::builtin().clone();
    catalog.merge(load_overlay());
    assert_eq!(catalog.node_types().last(), Some("internal_crm"));
}

#[test]
fn non_http_urls_fail_validation() {
    let yaml = include_str!("data/invalid_url.yaml");
    let error = GuideCatalog::from_yaml_str(yaml).expect_err("ftp url must be rejected");
    match error {
        CatalogError::InvalidUrl { node_type, field_key, url, .. } => {
            assert_eq!(node_type, "ftp_upload");
            assert_eq!(field_key, "host");
            assert_eq!(url, "ftp://files.example.com");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn future_versions_are_rejected() {
    let yaml = include_str!("data/future_version.yaml");
    let error = GuideCatalog::from_yaml_str(yaml).expect_err("version 2 must be rejected");
    assert!(matches!(error, CatalogError::UnsupportedVersion { found: 2, expected: 1 }));
}

#[test]
fn settings_load_overlays_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let overlay_path = dir.path().join("team.json");
    fs::write(&overlay_path, include_str!("data/overlay.json")).expect("write overlay");

    let settings = GuideSettings {
        overlay_catalogs: vec![overlay_path.display().to_string()],
        wrap_width: Some(60),
    };
    let catalog = settings.load_catalog().expect("effective catalog");
    assert!(catalog.has_entry("internal_crm", "tenantId"));
    assert!(catalog.has_entry("slack", "botToken"));
}

#[test]
fn missing_overlay_is_an_error_naming_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("absent.yaml");
    let settings = GuideSettings {
        overlay_catalogs: vec![missing.display().to_string()],
        wrap_width: None,
    };
    let error = settings.load_catalog().expect_err("missing overlay must fail");
    assert!(error.to_string().contains("absent.yaml"), "{error}");
}
