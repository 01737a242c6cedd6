use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;

/// Parameters for a single search request.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub text: String,
    pub is_regex: bool,
    pub case_sensitive: bool,
    pub path_prefix: String,
    pub limit: usize,
}

impl SearchQuery {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_regex: false,
            case_sensitive: false,
            path_prefix: String::new(),
            limit: 50,
        }
    }

    #[must_use]
    pub const fn regex(mut self, is_regex: bool) -> Self {
        self.is_regex = is_regex;
        self
    }

    #[must_use]
    pub const fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    #[must_use]
    pub fn path_prefix(mut self, prefix: &str) -> Self {
        self.path_prefix = prefix.to_string();
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// One matching line. Hits are reported in discovery order, one per line.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub path: String,
    /// 1-indexed line number.
    pub line: usize,
    /// Trimmed text of the matching line.
    pub snippet: String,
    /// The query text (text mode) or the first match's span (regex mode).
    #[serde(rename = "match")]
    pub matched_text: String,
}

/// One recognized taxonomy comment.
#[derive(Debug, Clone, Serialize)]
pub struct TodoItem {
    pub path: String,
    /// 1-indexed line number.
    pub line: usize,
    /// Taxonomy marker, e.g. `TODO` or `FIXME`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Trimmed comment body after the marker.
    pub text: String,
    /// Trimmed text of the whole line.
    pub snippet: String,
}

/// Cooperative cancellation signal, checked at file boundaries of long
/// scans. Cloning shares the underlying flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
