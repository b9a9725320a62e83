//! Exclusion set: base names never rendered or descended into.

use std::collections::HashSet;

/// Directory names skipped by the built-in default set.
const DEFAULT_EXCLUDES: &[&str] = &["__pycache__", "node_modules", ".git"];

/// Base names to omit from the tree, checked at every depth.
///
/// Matching is exact and case-sensitive, on the final path component only —
/// no patterns, no full-path matching.
#[derive(Debug, Clone, Default)]
pub struct Exclusions {
    names: HashSet<String>,
}

impl Exclusions {
    /// Empty set: nothing is excluded.
    pub fn none() -> Self {
        Self::default()
    }

    /// Build from explicit base names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in set of vendor and cache directories.
    pub fn builtin() -> Self {
        Self::new(DEFAULT_EXCLUDES.iter().copied())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_excludes_nothing() {
        let ex = Exclusions::none();
        assert!(!ex.contains("node_modules"));
        assert!(!ex.contains(""));
    }

    #[test]
    fn builtin_contains_common_junk_dirs() {
        let ex = Exclusions::builtin();
        assert!(ex.contains("node_modules"));
        assert!(ex.contains(".git"));
        assert!(ex.contains("__pycache__"));
        assert!(!ex.contains("src"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let ex = Exclusions::new(["Target"]);
        assert!(ex.contains("Target"));
        assert!(!ex.contains("target"));
    }

    #[test]
    fn matching_is_exact_not_substring() {
        let ex = Exclusions::new(["node_modules"]);
        assert!(!ex.contains("node_modules2"));
        assert!(!ex.contains("node"));
    }
}
