use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{CompassError, Result};

/// Raw-string traversal markers rejected before any filesystem resolution.
/// Checked case-insensitively; the percent-encoded forms cover single and
/// double encoding of `../` and `..\`.
const TRAVERSAL_MARKERS: &[&str] = &[
    "..", "../", "..\\", "..%2f", "..%5c", "..%252f", "..%255c",
];

/// Sandbox boundary: an ordered set of canonical, existing directories.
///
/// Every caller-supplied path must resolve to a descendant of (or equal to)
/// one of these roots before any filesystem access is permitted. Validation
/// failures are boolean outcomes, never errors.
pub struct PathGuard {
    roots: Vec<PathBuf>,
}

impl PathGuard {
    /// Build a guard from candidate root directories.
    ///
    /// Candidates that do not exist, are not directories, or cannot be
    /// canonicalized are dropped with a warning. Duplicates are removed.
    /// When nothing survives, the current working directory is used so the
    /// root set is never empty.
    #[must_use]
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roots: Vec<PathBuf> = Vec::new();

        for candidate in candidates {
            let candidate = candidate.as_ref();
            match canonical_dir(Path::new(candidate)) {
                Some(root) => {
                    if !roots.contains(&root) {
                        roots.push(root);
                    }
                }
                None => warn!(%candidate, "invalid root path, dropped"),
            }
        }

        if roots.is_empty() {
            warn!("no valid roots configured, falling back to current directory");
            if let Some(cwd) = std::env::current_dir()
                .ok()
                .as_deref()
                .and_then(canonical_dir)
            {
                roots.push(cwd);
            } else {
                roots.push(PathBuf::from("."));
            }
        }

        debug!(?roots, "path guard initialized");
        Self { roots }
    }

    /// The current allowed roots, in insertion order.
    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Check whether a caller-supplied path may be accessed.
    ///
    /// A safe path contains no traversal markers, canonicalizes (which also
    /// requires it to exist) and lies under at least one allowed root.
    #[must_use]
    pub fn is_safe(&self, path: &str) -> bool {
        if has_traversal_marker(path) {
            warn!(%path, "path traversal detected");
            return false;
        }

        let Ok(canonical) = dunce::canonicalize(path) else {
            warn!(%path, "path does not resolve");
            return false;
        };

        if !self.contains(&canonical) {
            warn!(%path, "path outside allowed roots");
            return false;
        }

        true
    }

    /// Check a search path prefix, which is interpreted relative to each
    /// allowed root. Traversal markers are rejected outright; an absolute
    /// prefix must itself be a safe path since joining it to a root would
    /// replace the root entirely.
    #[must_use]
    pub fn is_safe_prefix(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return true;
        }
        if has_traversal_marker(prefix) {
            warn!(%prefix, "path traversal detected in prefix");
            return false;
        }
        if Path::new(prefix).is_absolute() {
            return self.is_safe(prefix);
        }
        true
    }

    /// Resolve a path to its canonical form, or reject it as unsafe.
    ///
    /// # Errors
    /// Returns `UnsafePath` when `is_safe` rejects the path.
    pub fn resolve(&self, path: &str) -> Result<PathBuf> {
        if !self.is_safe(path) {
            return Err(CompassError::UnsafePath {
                path: path.to_string(),
            });
        }
        dunce::canonicalize(path).map_err(|_| CompassError::UnsafePath {
            path: path.to_string(),
        })
    }

    /// Strip dangerous segments and re-validate.
    ///
    /// Segments equal to `.` or `..`, or starting with `.`, are dropped and
    /// the remainder rejoined. If the result is still unsafe the first
    /// allowed root is returned instead.
    #[must_use]
    pub fn sanitize(&self, path: &str) -> PathBuf {
        let sanitized: PathBuf = Path::new(path)
            .components()
            .map(|c| c.as_os_str())
            .filter(|part| {
                let part = part.to_string_lossy();
                part != "." && part != ".." && !part.starts_with('.')
            })
            .collect();

        let display = sanitized.to_string_lossy();
        if !display.is_empty() && self.is_safe(&display) {
            sanitized
        } else {
            self.roots[0].clone()
        }
    }

    /// Return the path unchanged when safe, a sanitized fallback otherwise.
    #[must_use]
    pub fn safe_path(&self, path: &str) -> PathBuf {
        if self.is_safe(path) {
            PathBuf::from(path)
        } else {
            self.sanitize(path)
        }
    }

    /// Add an allowed root at runtime. Returns false for paths that do not
    /// name an existing directory. Already-present roots report success.
    pub fn add_root(&mut self, root: &str) -> bool {
        match canonical_dir(Path::new(root)) {
            Some(canonical) => {
                if !self.roots.contains(&canonical) {
                    debug!(root = %canonical.display(), "added allowed root");
                    self.roots.push(canonical);
                }
                true
            }
            None => {
                warn!(%root, "invalid root path");
                false
            }
        }
    }

    /// Remove an allowed root. Returns false when the root is not present.
    pub fn remove_root(&mut self, root: &str) -> bool {
        let Ok(canonical) = dunce::canonicalize(root) else {
            return false;
        };
        let before = self.roots.len();
        self.roots.retain(|r| r != &canonical);
        before != self.roots.len()
    }

    fn contains(&self, canonical: &Path) -> bool {
        // Component-wise ancestor test: /root2 is not inside /root.
        self.roots.iter().any(|root| canonical.starts_with(root))
    }
}

fn has_traversal_marker(path: &str) -> bool {
    let lower = path.to_lowercase();
    TRAVERSAL_MARKERS.iter().any(|m| lower.contains(m))
}

fn canonical_dir(path: &Path) -> Option<PathBuf> {
    let canonical = dunce::canonicalize(path).ok()?;
    canonical.is_dir().then_some(canonical)
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod tests;
