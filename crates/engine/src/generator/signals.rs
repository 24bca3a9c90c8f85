//! Normalized field metadata inspected by the classifier rules.

use fieldguide_types::FieldDescriptor;
use fieldguide_util::{contains_any, humanize_key, split_words};

/// Lowercased views over a [`FieldDescriptor`].
///
/// `haystack` is the concatenation of key, key words, label, and placeholder. The node type is
/// kept apart so that only rules asking for it can see it.
#[derive(Debug, Clone, Default)]
pub struct FieldSignals {
    key: String,
    label: String,
    node_type_raw: String,
    node_type: String,
    field_type: String,
    placeholder: String,
    haystack: String,
    words: Vec<String>,
}

impl FieldSignals {
    pub fn from_descriptor(descriptor: &FieldDescriptor) -> Self {
        let key = descriptor.key().trim().to_string();
        let label = descriptor.label().trim().to_string();
        let placeholder = descriptor.placeholder().trim().to_string();
        let key_words = split_words(&key);

        let haystack = format!("{} {} {} {}", key, key_words.join(" "), label, placeholder).to_lowercase();
        let mut words = key_words;
        words.extend(split_words(&label));
        words.extend(split_words(&placeholder));

        Self {
            key,
            label,
            node_type_raw: descriptor.node_type().trim().to_string(),
            node_type: descriptor.node_type().trim().to_lowercase(),
            field_type: descriptor.field_type().trim().to_lowercase(),
            placeholder: placeholder.to_lowercase(),
            haystack,
            words,
        }
    }

    /// Substring test over key, label, and placeholder.
    pub fn has(&self, needle: &str) -> bool {
        self.haystack.contains(needle)
    }

    pub fn has_any(&self, needles: &[&str]) -> bool {
        contains_any(&self.haystack, needles)
    }

    /// Whole-word test over key, label, and placeholder.
    pub fn has_word(&self, word: &str) -> bool {
        self.words.iter().any(|candidate| candidate == word)
    }

    pub fn has_any_word(&self, words: &[&str]) -> bool {
        words.iter().any(|word| self.has_word(word))
    }

    /// Substring test over the owning node type.
    pub fn node_is(&self, needles: &[&str]) -> bool {
        contains_any(&self.node_type, needles)
    }

    /// True when either the node type or the field text names the service.
    pub fn mentions_service(&self, service: &str) -> bool {
        self.node_type.contains(service) || self.haystack.contains(service)
    }

    pub fn type_is(&self, types: &[&str]) -> bool {
        types.contains(&self.field_type.as_str())
    }

    /// True when the field takes a single line of free text (or declares no type at all).
    pub fn is_text_like(&self) -> bool {
        self.type_is(&["", "text", "string", "email", "tel", "phone"])
    }

    /// Label as authored, else the humanized key, else "this field".
    pub fn display_label(&self) -> String {
        if !self.label.is_empty() {
            return self.label.clone();
        }
        let humanized = humanize_key(&self.key);
        if humanized.is_empty() { "this field".to_string() } else { humanized }
    }

    /// Humanized node type (`google_sheets` becomes `Google Sheets`), else "the service".
    pub fn service_name(&self) -> String {
        let humanized = humanize_key(&self.node_type_raw);
        if humanized.is_empty() { "the service".to_string() } else { humanized }
    }

    /// Lowercased placeholder, used by rules that look at value prefixes.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_words_join_the_haystack() {
        let signals = FieldSignals::from_descriptor(&FieldDescriptor::new("apiKey", "Key"));
        assert!(signals.has("api key"));
        assert!(signals.has("apikey"));
        assert!(signals.has_word("api"));
    }

    #[test]
    fn node_type_stays_out_of_the_haystack() {
        let descriptor = FieldDescriptor::new("host", "Host").with_node_type("secret_server");
        let signals = FieldSignals::from_descriptor(&descriptor);
        assert!(!signals.has("secret"));
        assert!(signals.node_is(&["secret"]));
        assert_eq!(signals.service_name(), "Secret Server");
    }

    #[test]
    fn empty_descriptor_has_neutral_display_names() {
        let signals = FieldSignals::from_descriptor(&FieldDescriptor::default());
        assert_eq!(signals.display_label(), "this field");
        assert_eq!(signals.service_name(), "the service");
        assert!(signals.is_text_like());
        assert!(!signals.has_word(""));
    }
}
