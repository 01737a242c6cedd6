#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the codecompass binary.
#[macro_export]
macro_rules! codecompass {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("codecompass"));
        cmd.env_remove("REPO_ROOT").env_remove("NO_COLOR");
        cmd
    }};
}

/// Temporary repository root with test fixtures.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// A small two-file repository: a Python module with taxonomy comments
    /// and a nested module with a risky call.
    pub fn with_sample_repo() -> Self {
        let fixture = Self::new();
        fixture.create_file(
            "a.py",
            "# TODO: tighten validation\ndef handler(data):\n    return data\n",
        );
        fixture.create_file(
            "sub/b.py",
            "def run(expr):\n    return eval(expr)\n",
        );
        fixture
    }

    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a `.codecompass.toml` in the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".codecompass.toml", content);
    }
}
