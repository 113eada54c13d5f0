use glob::Pattern;

use crate::types::{FlatEntry, RepoTreeError, Result};

/// Glob-based exclusion applied to listing entries before building
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    exclude: Vec<Pattern>,
}

impl EntryFilter {
    /// Compile exclusion patterns; an invalid pattern is an error
    pub fn new(patterns: &[String]) -> Result<Self> {
        let exclude = patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| RepoTreeError::Pattern {
                    pattern: p.clone(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { exclude })
    }

    pub fn is_empty(&self) -> bool {
        self.exclude.is_empty()
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        let path = path.trim_matches('/');
        self.exclude.iter().any(|p| p.matches(path))
    }

    /// Entries that survive the filter, in input order
    pub fn apply(&self, entries: &[FlatEntry]) -> Vec<FlatEntry> {
        entries
            .iter()
            .filter(|e| !self.is_excluded(&e.path))
            .cloned()
            .collect()
    }
}
