mod encoding;
mod info;

pub use info::FileInfo;

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{CompassError, Result};

/// Bounded, encoding-aware filesystem access.
///
/// Every read is gated by a size ceiling and decoded via statistical
/// encoding detection with lossy fallback, so no file content ever fails
/// to decode. Listing applies the same ignore patterns as the scan engine.
pub struct FileAccessor {
    max_file_size: u64,
    encoding_confidence: f32,
    ignore: GlobSet,
}

impl FileAccessor {
    /// # Errors
    /// Returns an error if any configured ignore pattern is an invalid glob.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            max_file_size: config.server.max_file_size_bytes(),
            encoding_confidence: config.server.encoding_confidence,
            ignore: build_globset(&config.repositories.ignore_patterns)?,
        })
    }

    /// Read a byte window of a file, sliced on character boundaries.
    ///
    /// Returns the windowed content and the total encoded byte length of
    /// the full document.
    ///
    /// # Errors
    /// `NotFound` for absent paths, `NotAFile` for non-files, `TooLarge`
    /// above the size ceiling, `FileRead` on I/O failure.
    pub fn read_file(&self, path: &Path, offset: usize, length: usize) -> Result<(String, u64)> {
        let (content, encoding) = self.decode_file(path)?;
        let total_bytes = encoding::encoded_len(&content, encoding) as u64;
        let window = encoding::byte_window(&content, encoding, offset, length);

        debug!(
            path = %path.display(),
            chars = window.chars().count(),
            total_bytes,
            "file read"
        );
        Ok((window, total_bytes))
    }

    /// Full, non-paginated read used by the scan engine.
    ///
    /// # Errors
    /// Same gates as [`Self::read_file`].
    pub fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(self.decode_file(path)?.0)
    }

    fn decode_file(&self, path: &Path) -> Result<(String, &'static encoding_rs::Encoding)> {
        let metadata = std::fs::metadata(path).map_err(|_| CompassError::NotFound {
            path: path.to_path_buf(),
        })?;
        if !metadata.is_file() {
            return Err(CompassError::NotAFile {
                path: path.to_path_buf(),
            });
        }
        if metadata.len() > self.max_file_size {
            return Err(CompassError::TooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit: self.max_file_size,
            });
        }

        let raw = std::fs::read(path).map_err(|source| CompassError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(encoding::decode(&raw, self.encoding_confidence))
    }

    /// Stat a path and build its metadata record.
    ///
    /// # Errors
    /// `NotFound` when the path does not exist.
    pub fn get_file_info(&self, path: &Path) -> Result<FileInfo> {
        let metadata = std::fs::metadata(path).map_err(|_| CompassError::NotFound {
            path: path.to_path_buf(),
        })?;
        Ok(FileInfo::from_metadata(path, &metadata))
    }

    /// List files under a directory.
    ///
    /// Directories themselves are never listed; hidden entries are skipped
    /// unless requested; ignore-pattern and size filters apply; entries
    /// whose metadata cannot be read are skipped rather than aborting.
    ///
    /// # Errors
    /// `NotFound` when the directory is absent, `NotADirectory` when the
    /// path is not a directory.
    pub fn list_files(
        &self,
        dir: &Path,
        recursive: bool,
        include_hidden: bool,
    ) -> Result<Vec<FileInfo>> {
        if !dir.exists() {
            return Err(CompassError::NotFound {
                path: dir.to_path_buf(),
            });
        }
        if !dir.is_dir() {
            return Err(CompassError::NotADirectory {
                path: dir.to_path_buf(),
            });
        }

        let max_depth = if recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(dir)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| include_hidden || e.depth() == 0 || !is_hidden(e.path()));

        let mut files = Vec::new();
        for entry in walker.filter_map(std::result::Result::ok) {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if self.ignore.is_match(path) {
                continue;
            }
            match std::fs::metadata(path) {
                Ok(metadata) if metadata.len() <= self.max_file_size => {
                    files.push(FileInfo::from_metadata(path, &metadata));
                }
                Ok(_) => {}
                Err(e) => warn!(path = %path.display(), "skipping unreadable entry: {e}"),
            }
        }

        debug!(dir = %dir.display(), count = files.len(), "listed files");
        Ok(files)
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

pub(crate) fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| CompassError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| CompassError::InvalidPattern {
        pattern: "combined patterns".to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
