use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::access::{FileAccessor, FileInfo};
use crate::config::Config;
use crate::error::{CompassError, Result};
use crate::explain::{Explainer, Explanation};
use crate::sandbox::PathGuard;
use crate::scan::{CancelToken, ScanEngine, SearchHit, SearchQuery, TodoItem};

/// Response for `search_code`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub items: Vec<SearchHit>,
    pub total: usize,
    pub query: String,
}

/// Response for `read_file`.
#[derive(Debug, Serialize)]
pub struct ReadFileResponse {
    pub content: String,
    pub total_bytes: u64,
    pub offset: usize,
    /// Number of characters actually returned.
    pub length: usize,
}

/// Response for `list_todos`.
#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub items: Vec<TodoItem>,
    pub total: usize,
}

/// The tool surface: every operation validates path arguments through the
/// guard, then delegates to the accessor, scan engine or explainer.
/// Failures are structured results; nothing panics across this boundary.
pub struct ToolHandler {
    config: Config,
    guard: PathGuard,
    accessor: FileAccessor,
    engine: ScanEngine,
    explainer: Explainer,
}

impl ToolHandler {
    /// # Errors
    /// Returns an error when configured ignore patterns fail to compile.
    pub fn new(config: Config) -> Result<Self> {
        let guard = PathGuard::new(&config.repositories.roots);
        let engine = ScanEngine::new(&config, guard.roots())?;
        let accessor = FileAccessor::new(&config)?;
        Ok(Self {
            config,
            guard,
            accessor,
            engine,
            explainer: Explainer::new(),
        })
    }

    #[must_use]
    pub const fn guard(&self) -> &PathGuard {
        &self.guard
    }

    /// Substring or regex search across the allowed roots.
    ///
    /// # Errors
    /// `UnsafePath` for a rejected prefix, `InvalidRegex` for a bad pattern.
    pub fn search_code(
        &self,
        query: &str,
        regex: bool,
        case_sensitive: bool,
        path_prefix: &str,
        limit: Option<usize>,
        cancel: &CancelToken,
    ) -> Result<SearchResponse> {
        self.check_prefix(path_prefix)?;

        let search = SearchQuery::new(query)
            .regex(regex)
            .case_sensitive(case_sensitive || self.config.search.case_sensitive)
            .path_prefix(path_prefix)
            .limit(limit.unwrap_or(self.config.search.default_limit));
        let items = self.engine.search(&search, cancel)?;

        Ok(SearchResponse {
            total: items.len(),
            items,
            query: query.to_string(),
        })
    }

    /// Paginated file read.
    ///
    /// # Errors
    /// `UnsafePath`, `NotFound`, `NotAFile`, `TooLarge` or `FileRead`.
    pub fn read_file(&self, path: &str, offset: usize, length: usize) -> Result<ReadFileResponse> {
        let resolved = self.guard.resolve(path)?;
        let (content, total_bytes) = self.accessor.read_file(&resolved, offset, length)?;
        Ok(ReadFileResponse {
            length: content.chars().count(),
            content,
            total_bytes,
            offset,
        })
    }

    /// Heuristic explanation of a line range, or of directly supplied code.
    ///
    /// When `code` is given the file is not read and `path` is used only as
    /// metadata (still validated when non-empty).
    ///
    /// # Errors
    /// `UnsafePath`, `InvalidRange`, or any single-file read error.
    pub fn explain_range(
        &self,
        path: &str,
        start_line: usize,
        end_line: usize,
        code: Option<&str>,
    ) -> Result<Explanation> {
        if start_line == 0 || start_line > end_line {
            return Err(CompassError::InvalidRange {
                start: start_line,
                end: end_line,
            });
        }

        let fragment = match code {
            Some(code) => {
                if !path.is_empty() {
                    self.check_prefix(path)?;
                }
                code.to_string()
            }
            None => {
                let resolved = self.guard.resolve(path)?;
                let content = self.accessor.read_to_string(&resolved)?;
                slice_lines(&content, start_line, end_line)
            }
        };

        Ok(self
            .explainer
            .explain(&fragment, path, start_line, end_line))
    }

    /// Taxonomy-comment extraction across the allowed roots.
    ///
    /// # Errors
    /// `UnsafePath` for a rejected prefix.
    pub fn list_todos(&self, path_prefix: &str, cancel: &CancelToken) -> Result<TodoResponse> {
        self.check_prefix(path_prefix)?;
        let items = self.engine.find_todos(path_prefix, cancel);
        Ok(TodoResponse {
            total: items.len(),
            items,
        })
    }

    /// Metadata for a single path.
    ///
    /// # Errors
    /// `UnsafePath` or `NotFound`.
    pub fn get_file_info(&self, path: &str) -> Result<FileInfo> {
        let resolved = self.guard.resolve(path)?;
        self.accessor.get_file_info(&resolved)
    }

    /// Directory listing with the same filters the scan engine applies.
    ///
    /// # Errors
    /// `UnsafePath`, `NotFound` or `NotADirectory`.
    pub fn list_files(
        &self,
        dir: &str,
        recursive: bool,
        include_hidden: bool,
    ) -> Result<Vec<FileInfo>> {
        let resolved = self.guard.resolve(dir)?;
        self.accessor.list_files(&resolved, recursive, include_hidden)
    }

    fn check_prefix(&self, prefix: &str) -> Result<()> {
        if self.guard.is_safe_prefix(prefix) {
            Ok(())
        } else {
            Err(CompassError::UnsafePath {
                path: prefix.to_string(),
            })
        }
    }
}

fn slice_lines(content: &str, start_line: usize, end_line: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let start = start_line.saturating_sub(1).min(lines.len());
    let end = end_line.min(lines.len());
    debug!(start, end, "sliced line range");
    lines[start..end].join("\n")
}

/// Fold a tool result into the uniform wire payload: the serialized value
/// on success, `{"error": ..., <empty shape>}` on failure.
pub fn to_payload<T: Serialize>(result: Result<T>, empty: &[(&str, Value)]) -> Value {
    match result.and_then(|v| serde_json::to_value(v).map_err(CompassError::from)) {
        Ok(value) => value,
        Err(e) => {
            let mut payload = json!({ "error": e.to_string() });
            if let Some(map) = payload.as_object_mut() {
                for (key, value) in empty {
                    map.insert((*key).to_string(), value.clone());
                }
            }
            payload
        }
    }
}

/// Empty-payload shapes per operation, matching the wire contract.
#[must_use]
pub fn empty_items() -> Vec<(&'static str, Value)> {
    vec![("items", json!([]))]
}

#[must_use]
pub fn empty_content() -> Vec<(&'static str, Value)> {
    vec![("content", json!(""))]
}

#[must_use]
pub fn empty_summary() -> Vec<(&'static str, Value)> {
    vec![("summary", json!(""))]
}

#[must_use]
pub const fn empty_none() -> Vec<(&'static str, Value)> {
    Vec::new()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
