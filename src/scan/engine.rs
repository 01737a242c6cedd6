use std::path::{Path, PathBuf};

use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::access::FileAccessor;
use crate::config::Config;
use crate::error::{CompassError, Result};

use super::filter::CandidateFilter;
use super::types::{CancelToken, SearchHit, SearchQuery, TodoItem};

/// Line-oriented search and TODO extraction over the allowed roots.
///
/// All state is built at construction; every call is an independent
/// read-only request. Per-file failures are logged and skipped so one
/// unreadable file never fails a whole scan.
pub struct ScanEngine {
    roots: Vec<PathBuf>,
    accessor: FileAccessor,
    filter: CandidateFilter,
    max_limit: usize,
    todo_matchers: Vec<(String, Regex)>,
}

impl ScanEngine {
    /// # Errors
    /// Returns an error if the configured ignore patterns are invalid globs
    /// or a TODO marker produces an invalid pattern.
    pub fn new(config: &Config, roots: &[PathBuf]) -> Result<Self> {
        Ok(Self {
            roots: roots.to_vec(),
            accessor: FileAccessor::new(config)?,
            filter: CandidateFilter::new(config)?,
            max_limit: config.search.max_limit,
            todo_matchers: build_todo_matchers(&config.todos.markers)?,
        })
    }

    /// Search candidate files line-by-line for a substring or regex.
    ///
    /// Results come back in discovery order, truncated at the query limit
    /// (itself capped at the configured maximum). Cancellation is honored
    /// between files, returning whatever was accumulated.
    ///
    /// # Errors
    /// `InvalidRegex` when the query is regex mode and fails to compile.
    pub fn search(&self, query: &SearchQuery, cancel: &CancelToken) -> Result<Vec<SearchHit>> {
        let limit = query.limit.clamp(1, self.max_limit);
        let matcher = LineMatcher::for_query(query)?;

        let mut hits = Vec::new();
        'files: for path in self.candidates(&query.path_prefix) {
            if cancel.is_cancelled() {
                debug!("search cancelled, returning partial results");
                break;
            }
            let content = match self.accessor.read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    warn!(path = %path.display(), "skipping file: {e}");
                    continue;
                }
            };

            for (line_no, line) in content.lines().enumerate() {
                if let Some(matched) = matcher.first_match(line) {
                    hits.push(SearchHit {
                        path: path.display().to_string(),
                        line: line_no + 1,
                        snippet: line.trim().to_string(),
                        matched_text: matched,
                    });
                    if hits.len() >= limit {
                        break 'files;
                    }
                }
            }
        }

        debug!(total = hits.len(), "search completed");
        Ok(hits)
    }

    /// Extract taxonomy comments (TODO, FIXME, ...) from candidate files.
    ///
    /// A line may yield one item per matching marker. Cancellation is
    /// honored between files.
    #[must_use]
    pub fn find_todos(&self, path_prefix: &str, cancel: &CancelToken) -> Vec<TodoItem> {
        let mut todos = Vec::new();
        for path in self.candidates(path_prefix) {
            if cancel.is_cancelled() {
                debug!("todo scan cancelled, returning partial results");
                break;
            }
            match self.accessor.read_to_string(&path) {
                Ok(content) => self.todos_in_file(&content, &path, &mut todos),
                Err(e) => warn!(path = %path.display(), "skipping file: {e}"),
            }
        }

        debug!(total = todos.len(), "todo scan completed");
        todos
    }

    fn todos_in_file(&self, content: &str, path: &Path, out: &mut Vec<TodoItem>) {
        for (line_no, line) in content.lines().enumerate() {
            for (kind, pattern) in &self.todo_matchers {
                if let Some(caps) = pattern.captures(line) {
                    let text = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();
                    out.push(TodoItem {
                        path: path.display().to_string(),
                        line: line_no + 1,
                        kind: kind.clone(),
                        text,
                        snippet: line.trim().to_string(),
                    });
                }
            }
        }
    }

    /// Candidate files under every allowed root, optionally narrowed by a
    /// path prefix, in stable discovery order.
    fn candidates(&self, path_prefix: &str) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for root in &self.roots {
            let base = if path_prefix.is_empty() {
                root.clone()
            } else {
                root.join(path_prefix)
            };
            if !base.exists() {
                continue;
            }
            files.extend(
                WalkDir::new(&base)
                    .sort_by_file_name()
                    .into_iter()
                    .filter_map(std::result::Result::ok)
                    .filter(|e| e.file_type().is_file())
                    .map(walkdir::DirEntry::into_path)
                    .filter(|p| self.filter.should_include(p)),
            );
        }
        files
    }
}

fn build_todo_matchers(markers: &[String]) -> Result<Vec<(String, Regex)>> {
    markers
        .iter()
        .map(|marker| {
            let pattern = format!(r"{}[:\s]*(.+)", regex::escape(marker));
            let regex = RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| CompassError::InvalidRegex { pattern, source })?;
            Ok((marker.to_uppercase(), regex))
        })
        .collect()
}

/// Per-query line matcher: compiled once, applied per line, reporting only
/// the first occurrence on each matching line.
enum LineMatcher {
    Text {
        /// Query as supplied, reported as the matched text.
        original: String,
        /// Case-folded needle used for the containment test.
        needle: String,
        case_sensitive: bool,
    },
    Pattern(Regex),
}

impl LineMatcher {
    fn for_query(query: &SearchQuery) -> Result<Self> {
        if query.is_regex {
            let regex = RegexBuilder::new(&query.text)
                .case_insensitive(!query.case_sensitive)
                .build()
                .map_err(|source| CompassError::InvalidRegex {
                    pattern: query.text.clone(),
                    source,
                })?;
            Ok(Self::Pattern(regex))
        } else {
            Ok(Self::Text {
                original: query.text.clone(),
                needle: if query.case_sensitive {
                    query.text.clone()
                } else {
                    query.text.to_lowercase()
                },
                case_sensitive: query.case_sensitive,
            })
        }
    }

    fn first_match(&self, line: &str) -> Option<String> {
        match self {
            Self::Text {
                original,
                needle,
                case_sensitive,
            } => {
                let contains = if *case_sensitive {
                    line.contains(needle.as_str())
                } else {
                    line.to_lowercase().contains(needle.as_str())
                };
                contains.then(|| original.clone())
            }
            Self::Pattern(regex) => regex.find(line).map(|m| m.as_str().to_string()),
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
