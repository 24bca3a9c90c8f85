//! Guide resolution.
//!
//! Three sources are consulted in strict priority order and the first that answers wins:
//!
//! 1. the curated catalog, keyed by the exact `(node type, field key)` pair;
//! 2. the field's own help text, when it passes the structure gate and yields steps;
//! 3. the heuristic generator, which always answers.
//!
//! The question label and the final security flag are derived separately from the winning guide.
//! The label uses a coarse keyword sniff of its own, and the security flag falls back to scanning
//! the resolved title and category for sensitive terms when the guide leaves it unset.

use fieldguide_registry::GuideCatalog;
use fieldguide_types::{FieldDescriptor, Guide, GuideCategory, GuideSource, Resolution};
use fieldguide_util::{contains_any, humanize_key, mentions_sensitive_term};
use tracing::debug;

use crate::{generator, help_text};

/// Resolves descriptors against a catalog.
#[derive(Debug, Clone, Copy)]
pub struct GuideResolver<'a> {
    catalog: &'a GuideCatalog,
}

/// Winning guide before the question label and security flag are derived.
struct Selection {
    guide: Guide,
    source: GuideSource,
    category: Option<GuideCategory>,
    custom_title: bool,
}

impl<'a> GuideResolver<'a> {
    pub fn new(catalog: &'a GuideCatalog) -> Self {
        Self { catalog }
    }

    /// Resolver backed by the embedded catalog.
    pub fn builtin() -> GuideResolver<'static> {
        GuideResolver::new(GuideCatalog::builtin())
    }

    /// True when a curated guide exists for the exact pair.
    pub fn has_curated_entry(&self, node_type: &str, field_key: &str) -> bool {
        self.catalog.has_entry(node_type, field_key)
    }

    /// Resolves a descriptor to exactly one guide. Never fails.
    pub fn resolve(&self, descriptor: &FieldDescriptor) -> Resolution {
        let mut selection = self.select(descriptor);
        if !selection.guide.has_steps() {
            selection = Selection {
                guide: self.catalog.default_guide(),
                source: GuideSource::Default,
                category: None,
                custom_title: false,
            };
        }

        let question_label = if selection.custom_title {
            selection.guide.title.clone()
        } else {
            question_label(descriptor)
        };

        let security_warning = selection
            .guide
            .security_warning
            .unwrap_or_else(|| infer_security_warning(&selection.guide.title, selection.category));
        selection.guide.security_warning = Some(security_warning);

        debug!(
            node_type = descriptor.node_type(),
            key = descriptor.key(),
            source = %selection.source,
            category = ?selection.category,
            security_warning,
            "resolved field guide"
        );

        Resolution {
            guide: selection.guide,
            question_label,
            source: selection.source,
            category: selection.category,
        }
    }

    fn select(&self, descriptor: &FieldDescriptor) -> Selection {
        if let Some(guide) = self.catalog.lookup(descriptor.node_type(), descriptor.key()) {
            return Selection {
                guide: guide.clone(),
                source: GuideSource::Catalog,
                category: None,
                custom_title: true,
            };
        }

        if let Some(parsed) = help_text::parse_help_text(descriptor.help_text(), &parser_label(descriptor)) {
            return Selection {
                guide: parsed.guide,
                source: GuideSource::HelpText,
                category: None,
                custom_title: parsed.explicit_title,
            };
        }

        let generated = generator::generate(descriptor);
        Selection {
            guide: generated.guide,
            source: GuideSource::Generated,
            category: Some(generated.category),
            custom_title: false,
        }
    }
}

/// Coarse question label derived from key and label keywords.
///
/// This is independent of the generator's classification and may phrase things differently.
pub fn question_label(descriptor: &FieldDescriptor) -> String {
    let text = format!("{} {} {}", descriptor.key(), humanize_key(descriptor.key()), descriptor.label()).to_lowercase();
    let label = if contains_any(&text, &["api key", "apikey", "api_key"]) {
        "How to get API key?"
    } else if contains_any(&text, &["url", "endpoint"]) {
        "How to get URL?"
    } else if contains_any(&text, &["token", "bearer"]) {
        "How to get Token?"
    } else if contains_any(&text, &["credential", "password", "secret"]) {
        "How to get Credentials?"
    } else {
        "How to get this value?"
    };
    label.to_string()
}

/// Second, coarser security classifier over the resolved title and category name.
fn infer_security_warning(title: &str, category: Option<GuideCategory>) -> bool {
    mentions_sensitive_term(title) || category.is_some_and(|category| mentions_sensitive_term(category.label()))
}

/// Label handed to the help-text parser for its fallback title.
fn parser_label(descriptor: &FieldDescriptor) -> String {
    let label = descriptor.label().trim();
    if label.is_empty() { humanize_key(descriptor.key()) } else { label.to_string() }
}

/// Resolves a descriptor against the embedded catalog.
pub fn resolve(descriptor: &FieldDescriptor) -> Resolution {
    GuideResolver::builtin().resolve(descriptor)
}

/// True when the embedded catalog has a curated guide for the exact pair.
pub fn has_curated_entry(node_type: &str, field_key: &str) -> bool {
    GuideResolver::builtin().has_curated_entry(node_type, field_key)
}
