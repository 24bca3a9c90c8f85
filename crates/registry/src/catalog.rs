//! Curated guide catalog.
//!
//! Guides are authored in a versioned YAML asset keyed by node type and then by field key. Both
//! keys are matched exactly as written: curated entries follow the node schema's own field keys,
//! so no case folding or label matching happens here. Node types may also carry pseudo-entries
//! such as `_connection_info` that document an OAuth connection instead of a literal field; they
//! are ordinary keys to the catalog.

use std::{fs, path::Path};

use fieldguide_types::Guide;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use url::Url;

use crate::error::CatalogError;

/// Catalog format version understood by this build.
pub const CATALOG_VERSION: u32 = 1;

/// Node type reported in errors about the default entry.
const DEFAULT_ENTRY_SCOPE: &str = "<default>";

static BUILTIN_CATALOG_SOURCE: &str = include_str!("../data/guides.yaml");

static BUILTIN_CATALOG: Lazy<GuideCatalog> = Lazy::new(|| match GuideCatalog::from_yaml_str(BUILTIN_CATALOG_SOURCE) {
    Ok(catalog) => {
        debug!(entries = catalog.len(), "loaded embedded guide catalog");
        catalog
    }
    Err(error) => {
        error!(%error, "embedded guide catalog failed to load; only the default guide is available");
        GuideCatalog::empty()
    }
});

/// On-disk shape of a catalog document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogDocument {
    version: u32,
    #[serde(default)]
    default: Option<Guide>,
    #[serde(default)]
    nodes: IndexMap<String, IndexMap<String, Guide>>,
}

/// Immutable map from `(node type, field key)` to an authored guide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuideCatalog {
    default: Option<Guide>,
    nodes: IndexMap<String, IndexMap<String, Guide>>,
}

impl GuideCatalog {
    /// The catalog embedded in the binary, parsed on first use.
    pub fn builtin() -> &'static GuideCatalog {
        &BUILTIN_CATALOG
    }

    /// A catalog with no curated entries; [`GuideCatalog::default_guide`] still answers.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses and validates a YAML catalog document.
    pub fn from_yaml_str(source: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_yaml::from_str(source)?;
        Self::from_document(document)
    }

    /// Parses and validates a JSON catalog document.
    pub fn from_json_str(source: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(source)?;
        Self::from_document(document)
    }

    /// Loads a catalog file, choosing JSON for `.json` files and YAML otherwise.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        if document.version != CATALOG_VERSION {
            return Err(CatalogError::UnsupportedVersion {
                found: document.version,
                expected: CATALOG_VERSION,
            });
        }
        let catalog = Self {
            default: document.default,
            nodes: document.nodes,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks every entry, returning the first problem found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if let Some(default) = &self.default {
            validate_guide(DEFAULT_ENTRY_SCOPE, "default", default)?;
        }
        for (node_type, field_key, guide) in self.entries() {
            validate_guide(node_type, field_key, guide)?;
        }
        Ok(())
    }

    /// True when a curated guide exists for the exact `(node_type, field_key)` pair.
    pub fn has_entry(&self, node_type: &str, field_key: &str) -> bool {
        self.lookup(node_type, field_key).is_some()
    }

    /// Returns the curated guide for the exact `(node_type, field_key)` pair.
    pub fn lookup(&self, node_type: &str, field_key: &str) -> Option<&Guide> {
        self.nodes.get(node_type)?.get(field_key)
    }

    /// The generic guide used when no other source yields steps.
    pub fn default_guide(&self) -> Guide {
        self.default.clone().unwrap_or_else(fallback_default_guide)
    }

    /// Iterates `(node type, field key, guide)` in authoring order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &Guide)> {
        self.nodes.iter().flat_map(|(node_type, fields)| {
            fields
                .iter()
                .map(move |(field_key, guide)| (node_type.as_str(), field_key.as_str(), guide))
        })
    }

    /// Node types with at least one curated entry, in authoring order.
    pub fn node_types(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Number of curated entries, excluding the default guide.
    pub fn len(&self) -> usize {
        self.nodes.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Layers `overlay` on top of this catalog.
    ///
    /// Overlay entries replace entries with the same key; new node types and fields are appended.
    /// The overlay's default guide replaces ours only when the overlay declares one.
    pub fn merge(&mut self, overlay: GuideCatalog) {
        if overlay.default.is_some() {
            self.default = overlay.default;
        }
        for (node_type, fields) in overlay.nodes {
            self.nodes.entry(node_type).or_default().extend(fields);
        }
    }
}

fn validate_guide(node_type: &str, field_key: &str, guide: &Guide) -> Result<(), CatalogError> {
    if guide.title.trim().is_empty() {
        return Err(CatalogError::EmptyTitle {
            node_type: node_type.to_string(),
            field_key: field_key.to_string(),
        });
    }
    if !guide.has_steps() {
        return Err(CatalogError::MissingSteps {
            node_type: node_type.to_string(),
            field_key: field_key.to_string(),
        });
    }
    if let Some(raw_url) = &guide.url {
        let invalid = |reason: String| CatalogError::InvalidUrl {
            node_type: node_type.to_string(),
            field_key: field_key.to_string(),
            url: raw_url.clone(),
            reason,
        };
        let parsed = Url::parse(raw_url).map_err(|error| invalid(error.to_string()))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(invalid(format!("unsupported scheme `{}`", parsed.scheme())));
        }
    }
    Ok(())
}

/// Hard-coded default used when a catalog declares none.
fn fallback_default_guide() -> Guide {
    Guide::new(
        "How to get this value?",
        [
            "Step 1: Open the dashboard or settings page of the service this node connects to",
            "Step 2: Look for a section named API, Developers, Integrations, or Credentials",
            "Step 3: Create or copy the value this field asks for",
            "Step 4: Paste it here and save the node",
        ],
    )
}
