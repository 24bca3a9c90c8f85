//! # Fieldguide Engine
//!
//! Resolves a workflow field's metadata into one human-readable, step-by-step guide that tells
//! a user how to obtain the value the field expects.
//!
//! Resolution consults three sources in strict priority order:
//!
//! - **Catalog**: curated guides keyed by `(node type, field key)`, see [`fieldguide_registry`]
//! - **Help text**: the field's own help text, when it is structured enough to yield steps
//! - **Generator**: an ordered rule table that classifies the field and synthesizes a guide
//!
//! ## Usage
//!
//! ```rust
//! use fieldguide_engine::resolve;
//! use fieldguide_types::{FieldDescriptor, GuideSource};
//!
//! let descriptor = FieldDescriptor::new("apiKey", "API Key").with_node_type("google_gemini");
//! let resolution = resolve(&descriptor);
//!
//! assert_eq!(resolution.source, GuideSource::Catalog);
//! assert!(resolution.security_warning());
//! ```

pub mod generator;
pub mod help_text;
pub mod resolve;

pub use generator::{GeneratedGuide, classify, generate};
pub use help_text::{ParsedHelpText, looks_structured, parse_help_text};
pub use resolve::{GuideResolver, has_curated_entry, question_label, resolve};
