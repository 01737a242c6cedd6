use std::fs::Metadata;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::language;

/// Metadata record for a single filesystem entry.
#[derive(Debug, Clone, Serialize)]
pub struct FileInfo {
    pub path: String,
    pub name: String,
    pub size: u64,
    pub size_mb: f64,
    pub language: String,
    pub extension: String,
    pub is_readable: bool,
    pub permissions: String,
    pub modified: f64,
    pub created: f64,
    pub is_file: bool,
    pub is_directory: bool,
    pub parent: String,
}

impl FileInfo {
    #[must_use]
    pub fn from_metadata(path: &Path, metadata: &Metadata) -> Self {
        let extension = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let size = metadata.len();
        #[allow(clippy::cast_precision_loss)]
        let size_mb = ((size as f64) / (1024.0 * 1024.0) * 100.0).round() / 100.0;

        Self {
            path: path.display().to_string(),
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            size,
            size_mb,
            language: language::from_extension(&extension).to_string(),
            extension,
            is_readable: is_readable(path, metadata),
            permissions: permissions_string(metadata),
            modified: epoch_seconds(metadata.modified()),
            created: epoch_seconds(metadata.created()),
            is_file: metadata.is_file(),
            is_directory: metadata.is_dir(),
            parent: path
                .parent()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        }
    }
}

fn epoch_seconds(time: std::io::Result<SystemTime>) -> f64 {
    time.ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map_or(0.0, |d| d.as_secs_f64())
}

fn is_readable(path: &Path, metadata: &Metadata) -> bool {
    if metadata.is_dir() {
        std::fs::read_dir(path).is_ok()
    } else {
        std::fs::File::open(path).is_ok()
    }
}

/// `ls -l` style permission string, e.g. `-rw-r--r--` or `drwxr-xr-x`.
#[cfg(unix)]
fn permissions_string(metadata: &Metadata) -> String {
    use std::os::unix::fs::PermissionsExt;

    let mode = metadata.permissions().mode();
    let kind = if metadata.is_dir() {
        'd'
    } else if metadata.is_symlink() {
        'l'
    } else {
        '-'
    };

    let mut out = String::with_capacity(10);
    out.push(kind);
    for shift in [6u32, 3, 0] {
        let bits = (mode >> shift) & 0o7;
        out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}

#[cfg(not(unix))]
fn permissions_string(metadata: &Metadata) -> String {
    let kind = if metadata.is_dir() { 'd' } else { '-' };
    let write = if metadata.permissions().readonly() {
        '-'
    } else {
        'w'
    };
    format!("{kind}r{write}-r--r--")
}

#[cfg(test)]
#[path = "info_tests.rs"]
mod tests;
