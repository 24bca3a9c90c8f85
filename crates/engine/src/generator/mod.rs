//! Heuristic guide generation.
//!
//! When no curated entry or structured help text exists, the generator classifies the field
//! from its metadata alone and synthesizes a guide for the inferred category. It always answers:
//! the last rule in the table matches everything.

pub mod rules;
pub mod signals;
pub mod templates;

use fieldguide_types::{FieldDescriptor, Guide, GuideCategory};
use tracing::trace;

pub use rules::{GuideRule, RULES, TERMINAL_RULE, precedence};
pub use signals::FieldSignals;

/// A synthesized guide together with the category that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedGuide {
    pub category: GuideCategory,
    pub guide: Guide,
}

/// Classifies the field and builds the guide for its category.
pub fn generate(descriptor: &FieldDescriptor) -> GeneratedGuide {
    let signals = FieldSignals::from_descriptor(descriptor);
    let rule = rules::first_match(&signals);
    trace!(category = ?rule.category, key = descriptor.key(), "classifier rule matched");
    GeneratedGuide {
        category: rule.category,
        guide: (rule.build)(&signals),
    }
}

/// Classifies the field without building a guide.
pub fn classify(descriptor: &FieldDescriptor) -> GuideCategory {
    rules::first_match(&FieldSignals::from_descriptor(descriptor)).category
}
