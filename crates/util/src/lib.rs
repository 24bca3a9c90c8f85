//! Text normalization and path helpers shared across the field guide crates.

pub mod path_processing;
pub mod text_processing;

pub use path_processing::{config_file_path, expand_tilde};
pub use text_processing::{
    SENSITIVE_TERMS, contains_any, humanize_key, mentions_sensitive_term, split_words, starts_with_ignore_case,
};
