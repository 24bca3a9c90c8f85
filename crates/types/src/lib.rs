//! Shared type definitions for the field guide workspace.
//!
//! [`FieldDescriptor`] is the resolver's input and [`Resolution`] its output. Both are plain
//! serde data so the presentation shell can read descriptors from YAML/JSON and emit guides as JSON.

pub mod field;
pub mod guide;

pub use field::FieldDescriptor;
pub use guide::{Guide, GuideCategory, GuideSource, Resolution};
