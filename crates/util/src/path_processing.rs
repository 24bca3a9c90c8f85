//! Path helpers for locating user configuration files.

use std::{env, path::PathBuf};

use dirs_next::{config_dir, home_dir};

/// Expands a leading `~` (Unix or Windows separator) to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    let home = || home_dir().unwrap_or_else(|| PathBuf::from("~"));
    if trimmed == "~" {
        return home();
    }
    match trimmed.strip_prefix("~/").or_else(|| trimmed.strip_prefix("~\\")) {
        Some(rest) => home().join(rest),
        None => PathBuf::from(trimmed),
    }
}

/// Resolves a configuration file path.
///
/// A non-blank `override_env` variable wins (tilde-expanded); otherwise the file lives at
/// `<config_dir>/<app_dir>/<file_name>`, falling back to the working directory when the platform
/// reports no configuration directory.
pub fn config_file_path(override_env: &str, app_dir: &str, file_name: &str) -> PathBuf {
    if let Ok(path) = env::var(override_env)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }

    config_dir().unwrap_or_else(|| PathBuf::from(".")).join(app_dir).join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(expand_tilde(" /etc/fieldguide.json "), PathBuf::from("/etc/fieldguide.json"));
    }

    #[test]
    fn override_env_wins_when_set() {
        temp_env::with_var("FIELDGUIDE_TEST_PATH", Some("/tmp/custom.json"), || {
            let path = config_file_path("FIELDGUIDE_TEST_PATH", "fieldguide", "settings.json");
            assert_eq!(path, PathBuf::from("/tmp/custom.json"));
        });
    }

    #[test]
    fn blank_override_falls_back_to_config_dir() {
        temp_env::with_var("FIELDGUIDE_TEST_BLANK", Some("   "), || {
            let path = config_file_path("FIELDGUIDE_TEST_BLANK", "fieldguide", "settings.json");
            assert!(path.ends_with("fieldguide/settings.json"));
        });
    }
}
