//! Field metadata consumed by the guide resolver.
//!
//! Descriptors arrive from node schemas authored elsewhere, so every member is optional and
//! deserialization never fails on a member that is `null`, numeric, or otherwise not a string.
//! Such members are simply treated as absent.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

/// Describes one input field on a workflow node.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Field key exactly as the node schema defines it (for example, `apiKey`).
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Human-readable label rendered next to the input.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Input widget type (`text`, `textarea`, `json`, `number`, ...).
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// Placeholder text shown while the input is empty.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Identifier of the node type that owns the field (for example, `google_gemini`).
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    /// Free-text help authored alongside the field, if any.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

impl FieldDescriptor {
    /// Creates a descriptor with a key and label; all other members are absent.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, field_type: impl Into<String>) -> Self {
        self.r#type = Some(field_type.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_node_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = Some(node_type.into());
        self
    }

    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    /// Field key, or an empty string when absent.
    pub fn key(&self) -> &str {
        self.key.as_deref().unwrap_or("")
    }

    /// Field label, or an empty string when absent.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }

    /// Field type, or an empty string when absent.
    pub fn field_type(&self) -> &str {
        self.r#type.as_deref().unwrap_or("")
    }

    /// Placeholder, or an empty string when absent.
    pub fn placeholder(&self) -> &str {
        self.placeholder.as_deref().unwrap_or("")
    }

    /// Owning node type, or an empty string when absent.
    pub fn node_type(&self) -> &str {
        self.node_type.as_deref().unwrap_or("")
    }

    /// Help text, or an empty string when absent.
    pub fn help_text(&self) -> &str {
        self.help_text.as_deref().unwrap_or("")
    }
}

/// Accepts a string; any other JSON/YAML shape (null, number, bool, list, map) becomes `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<JsonValue>::deserialize(deserializer)?;
    Ok(match value {
        Some(JsonValue::String(text)) => Some(text),
        _ => None,
    })
}
