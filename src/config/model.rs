use serde::{Deserialize, Serialize};

/// Top-level configuration, deserialized from `.codecompass.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub repositories: RepositoryConfig,
    pub search: SearchConfig,
    pub todos: TodoConfig,
    pub semantic: SemanticConfig,
}

/// Server-wide resource limits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Size ceiling for reads and scans, in MiB.
    pub max_file_size_mb: u64,

    /// Minimum sniffing confidence required to accept a detected encoding.
    /// Below this, decoding falls back to UTF-8.
    pub encoding_confidence: f32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 10,
            encoding_confidence: 0.7,
        }
    }
}

impl ServerConfig {
    /// Size ceiling in bytes.
    #[must_use]
    pub const fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb * 1024 * 1024
    }
}

/// Sandbox roots and ignore patterns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Allowed root directories. Empty means "current working directory".
    pub roots: Vec<String>,

    /// Glob patterns for entries excluded from scans and listings.
    pub ignore_patterns: Vec<String>,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            ignore_patterns: default_ignore_patterns(),
        }
    }
}

fn default_ignore_patterns() -> Vec<String> {
    [
        "**/node_modules/**",
        "**/.git/**",
        "**/__pycache__/**",
        "**/*.pyc",
        "**/dist/**",
        "**/build/**",
        "**/.venv/**",
        "**/venv/**",
        "**/.pytest_cache/**",
        "**/coverage/**",
        "**/.coverage",
        "**/htmlcov/**",
        "**/.mypy_cache/**",
        "**/.tox/**",
        "**/target/**",
        "**/Cargo.lock",
        "**/package-lock.json",
        "**/yarn.lock",
        "**/Pipfile.lock",
        "**/poetry.lock",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Search defaults and candidate-file filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Default result limit when the caller does not supply one.
    pub default_limit: usize,

    /// Hard result cap; caller-supplied limits are clamped to this.
    pub max_limit: usize,

    /// Whether text search is case-sensitive by default.
    pub case_sensitive: bool,

    /// Extensions (without dot) eligible for searching.
    pub extensions: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: 50,
            max_limit: 1000,
            case_sensitive: false,
            extensions: default_search_extensions(),
        }
    }
}

fn default_search_extensions() -> Vec<String> {
    [
        "py", "js", "ts", "jsx", "tsx", "java", "cpp", "c", "h", "go", "rs", "php", "rb", "swift",
        "kt",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// TODO-taxonomy markers, in detection order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TodoConfig {
    pub markers: Vec<String>,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            markers: ["TODO", "FIXME", "HACK", "NOTE", "XXX", "BUG"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Embedding-based semantic search settings. Parsed and carried for the
/// outer shell; nothing in this crate consumes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SemanticConfig {
    pub enabled: bool,
    pub model: String,
    pub chunk_size: usize,
    pub index_path: String,
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            model: "all-MiniLM-L6-v2".to_string(),
            chunk_size: 512,
            index_path: "./indexes".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
