//! Shared helpers for the walker and the lister

use std::ffi::OsStr;
use std::path::Path;

use glob::Pattern;

use super::config::ScanConfig;

/// Check if an entry name is hidden (dot-prefixed).
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Check if a name matches one of the configured ignore patterns.
pub fn is_ignored(name: &str, config: &ScanConfig) -> bool {
    config
        .ignore_patterns
        .iter()
        .any(|pattern| name == pattern || glob_match(pattern, name))
}

/// Check if an entry should be left out of a listing based on its name.
pub fn should_skip_entry(name: &str, config: &ScanConfig) -> bool {
    (!config.show_hidden && is_hidden(name)) || is_ignored(name, config)
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// Lossy UTF-8 rendering of a file name.
pub fn entry_name(name: &OsStr) -> String {
    name.to_string_lossy().into_owned()
}

/// Base name used in report file names.
///
/// Falls back to the canonical path for `.`/`..`/`/`, and to `root` when
/// nothing better exists.
pub fn base_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return entry_name(name);
    }

    path.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(entry_name))
        .unwrap_or_else(|| "root".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_match() {
        assert!(glob_match("*.log", "debug.log"));
        assert!(!glob_match("*.log", "debug.txt"));
        assert!(glob_match("target", "target"));
        assert!(glob_match("tmp?", "tmp1"));
        assert!(!glob_match("tmp?", "tmp12"));
        assert!(glob_match("[ab].txt", "a.txt"));
    }

    #[test]
    fn test_hidden_entries_skipped_by_default() {
        let config = ScanConfig::default();
        assert!(should_skip_entry(".DS_Store", &config));
        assert!(should_skip_entry(".git", &config));
        assert!(!should_skip_entry("notes.txt", &config));
    }

    #[test]
    fn test_show_hidden_keeps_dot_entries() {
        let config = ScanConfig {
            show_hidden: true,
            ..Default::default()
        };
        assert!(!should_skip_entry(".DS_Store", &config));
    }

    #[test]
    fn test_ignore_patterns() {
        let config = ScanConfig {
            ignore_patterns: vec!["*.tmp".to_string(), "build".to_string()],
            ..Default::default()
        };
        assert!(should_skip_entry("scratch.tmp", &config));
        assert!(should_skip_entry("build", &config));
        assert!(!should_skip_entry("src", &config));
    }

    #[test]
    fn test_hidden_names_are_not_ignored() {
        let config = ScanConfig::default();
        assert!(!is_ignored(".git", &config));

        let config = ScanConfig {
            ignore_patterns: vec![".cache".to_string()],
            ..Default::default()
        };
        assert!(is_ignored(".cache", &config));
        assert!(!is_ignored(".config", &config));
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name(Path::new("/tmp/photos")), "photos");
        assert_eq!(base_name(Path::new("/tmp/photos/")), "photos");
        assert_eq!(base_name(Path::new("relative/dir")), "dir");
    }

    #[test]
    fn test_base_name_without_file_name() {
        let cwd = std::env::current_dir().expect("cwd");
        let expected = cwd
            .canonicalize()
            .ok()
            .and_then(|p| p.file_name().map(entry_name))
            .unwrap_or_else(|| "root".to_string());
        assert_eq!(base_name(Path::new(".")), expected);
    }
}
