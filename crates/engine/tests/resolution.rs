use fieldguide_engine::{GuideResolver, has_curated_entry, resolve};
use fieldguide_registry::GuideCatalog;
use fieldguide_types::{FieldDescriptor, GuideCategory, GuideSource};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    descriptor: FieldDescriptor,
    expect: Expectation,
}

#[derive(Debug, Deserialize)]
struct Expectation {
    source: GuideSource,
    #[serde(default)]
    category: Option<GuideCategory>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    question_label: Option<String>,
    #[serde(default)]
    example: Option<String>,
    #[serde(default)]
    steps: Option<usize>,
    #[serde(default)]
    security_warning: Option<bool>,
}

fn load_cases() -> Vec<Case> {
    let yaml = include_str!("data/descriptors.yaml");
    serde_yaml::from_str(yaml).expect("parse descriptor fixture")
}

#[test]
fn fixture_descriptors_resolve_as_expected() {
    for case in load_cases() {
        let resolution = resolve(&case.descriptor);
        let expect = &case.expect;
        let name = &case.name;

        assert_eq!(resolution.source, expect.source, "{name}: source");
        if expect.source == GuideSource::Generated {
            if let Some(category) = expect.category {
                assert_eq!(resolution.category, Some(category), "{name}: category");
            }
        } else {
            assert_eq!(resolution.category, None, "{name}: only generated guides carry a category");
        }
        if let Some(title) = &expect.title {
            assert_eq!(&resolution.guide.title, title, "{name}: title");
        }
        if let Some(label) = &expect.question_label {
            assert_eq!(&resolution.question_label, label, "{name}: question label");
        }
        if let Some(example) = &expect.example {
            assert_eq!(resolution.guide.example.as_ref(), Some(example), "{name}: example");
        }
        if let Some(steps) = expect.steps {
            assert_eq!(resolution.guide.steps.len(), steps, "{name}: step count");
        }
        if let Some(flag) = expect.security_warning {
            assert_eq!(resolution.security_warning(), flag, "{name}: security warning");
        }
        assert!(resolution.guide.has_steps(), "{name}: resolved guide must have steps");
        assert!(resolution.guide.security_warning.is_some(), "{name}: flag is always decided");
    }
}

#[test]
fn resolution_is_deterministic_across_fixtures() {
    for case in load_cases() {
        assert_eq!(resolve(&case.descriptor), resolve(&case.descriptor), "{}", case.name);
    }
}

#[test]
fn curated_pairs_are_exact() {
    assert!(has_curated_entry("google_gemini", "apiKey"));
    assert!(!has_curated_entry("google_gemini", "apikey"));
    assert!(!has_curated_entry("Google_Gemini", "apiKey"));
    assert!(!has_curated_entry("unknown_node", "apiKey"));
}

#[test]
fn custom_catalog_overrides_generation() {
    let yaml = r#"
version: 1
nodes:
  internal_crm:
    tenantId:
      title: Finding your CRM tenant
      steps:
        - "Step 1: Open Admin > Tenant"
        - "Step 2: Copy the tenant identifier"
"#;
    let catalog = GuideCatalog::from_yaml_str(yaml).expect("parse catalog");
    let resolver = GuideResolver::new(&catalog);
    let descriptor = FieldDescriptor::new("tenantId", "Tenant ID").with_node_type("internal_crm");

    let resolution = resolver.resolve(&descriptor);
    assert_eq!(resolution.source, GuideSource::Catalog);
    assert_eq!(resolution.question_label, "Finding your CRM tenant");
    assert!(!resolution.security_warning());

    let builtin = resolve(&descriptor);
    assert_eq!(builtin.source, GuideSource::Generated);
    assert_eq!(builtin.category, Some(GuideCategory::ResourceId));
}

#[test]
fn resolution_serializes_for_the_editor() {
    let descriptor = FieldDescriptor::new("apiKey", "API Key").with_node_type("google_gemini");
    let json = serde_json::to_value(resolve(&descriptor)).expect("serialize resolution");
    assert_eq!(json["source"], "catalog");
    assert_eq!(json["questionLabel"], "Gemini AI Studio API Key – Step-by-Step");
    assert_eq!(json["guide"]["securityWarning"], true);
}
