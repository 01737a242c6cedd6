use std::path::Path;

use globset::GlobSet;

use crate::access::build_globset;
use crate::config::Config;
use crate::error::Result;

/// Filter deciding which filesystem entries are eligible for scanning:
/// extension allow-list, ignore globs, size ceiling.
pub struct CandidateFilter {
    extensions: Vec<String>,
    ignore: GlobSet,
    max_file_size: u64,
}

impl CandidateFilter {
    /// # Errors
    /// Returns an error if any configured ignore pattern is an invalid glob.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            extensions: config.search.extensions.clone(),
            ignore: build_globset(&config.repositories.ignore_patterns)?,
            max_file_size: config.server.max_file_size_bytes(),
        })
    }

    /// True when the path survives all three filters. Stat failures count
    /// as exclusion so a vanished file never reaches the scanner.
    #[must_use]
    pub fn should_include(&self, path: &Path) -> bool {
        self.has_allowed_extension(path) && !self.is_ignored(path) && self.is_within_size(path)
    }

    fn has_allowed_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn is_ignored(&self, path: &Path) -> bool {
        self.ignore.is_match(path)
    }

    fn is_within_size(&self, path: &Path) -> bool {
        std::fs::metadata(path).is_ok_and(|m| m.len() <= self.max_file_size)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
