//! Registry crate for curated field guides.
//!
//! The embedded catalog maps `(node type, field key)` pairs to authored guides. User settings may
//! layer additional catalogs on top of it.

pub mod catalog;
pub mod error;
pub mod settings;

pub use catalog::{CATALOG_VERSION, GuideCatalog};
pub use error::CatalogError;
pub use settings::{GuideSettings, SETTINGS_PATH_ENV, default_settings_path};
