//! Configuration types for directory scanning

/// Controls which entries the walker and the lister consider.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Include dot-prefixed entries in listings. Hidden directories are walked either way.
    pub show_hidden: bool,
    /// Glob patterns matched against entry names; matches are neither listed nor walked
    pub ignore_patterns: Vec<String>,
    /// Deepest directory level to report (root = 0). `None` means unlimited.
    pub max_depth: Option<usize>,
}

impl ScanConfig {
    /// Check whether a directory at `depth` is too deep to be reported.
    pub fn beyond_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }
}
