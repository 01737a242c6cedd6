use super::*;
use crate::config::{Config, RepositoryConfig, ServerConfig};
use crate::error::CompassError;
use tempfile::TempDir;

fn accessor() -> FileAccessor {
    FileAccessor::new(&Config::default()).unwrap()
}

fn small_accessor(max_mb: u64) -> FileAccessor {
    let config = Config {
        server: ServerConfig {
            max_file_size_mb: max_mb,
            ..ServerConfig::default()
        },
        ..Config::default()
    };
    FileAccessor::new(&config).unwrap()
}

#[test]
fn read_file_returns_content_and_total_bytes() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("a.py");
    std::fs::write(&file, "line one\nline two\n").unwrap();

    let (content, total) = accessor().read_file(&file, 0, 10_000).unwrap();
    assert_eq!(content, "line one\nline two\n");
    assert_eq!(total, 18);
}

#[test]
fn full_read_byte_length_matches_reported_total() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("u.py");
    std::fs::write(&file, "caf\u{e9}\n\u{1f600}\n").unwrap();

    let (content, total) = accessor().read_file(&file, 0, usize::MAX).unwrap();
    assert_eq!(content.len() as u64, total);
}

#[test]
fn pagination_reconstructs_document() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("p.py");
    let text = "abc\u{e9}def\u{1f600}ghi jkl";
    std::fs::write(&file, text).unwrap();

    let acc = accessor();
    let (_, total) = acc.read_file(&file, 0, usize::MAX).unwrap();

    let mut rebuilt = String::new();
    let mut offset = 0usize;
    while (offset as u64) < total {
        let (chunk, _) = acc.read_file(&file, offset, 5).unwrap();
        rebuilt.push_str(&chunk);
        offset += 5;
    }
    assert_eq!(rebuilt, text);
}

#[test]
fn read_missing_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let err = accessor()
        .read_file(&temp.path().join("absent.py"), 0, 10)
        .unwrap_err();
    assert!(matches!(err, CompassError::NotFound { .. }));
}

#[test]
fn read_directory_is_not_a_file() {
    let temp = TempDir::new().unwrap();
    let err = accessor().read_file(temp.path(), 0, 10).unwrap_err();
    assert!(matches!(err, CompassError::NotAFile { .. }));
}

#[test]
fn oversized_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("big.py");
    std::fs::write(&file, vec![b'x'; 2 * 1024 * 1024]).unwrap();

    let err = small_accessor(1).read_file(&file, 0, 10).unwrap_err();
    assert!(matches!(err, CompassError::TooLarge { .. }));
}

#[test]
fn malformed_utf8_is_decoded_lossily() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("weird.py");
    std::fs::write(&file, b"prefix \xff\xfe suffix").unwrap();

    // Never errors; undecodable bytes become replacement characters.
    let (content, _) = accessor().read_file(&file, 0, 10_000).unwrap();
    assert!(content.contains("prefix"));
    assert!(content.contains("suffix"));
}

#[test]
fn get_file_info_reports_language() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("mod.rs");
    std::fs::write(&file, "pub fn f() {}\n").unwrap();

    let info = accessor().get_file_info(&file).unwrap();
    assert_eq!(info.language, "rust");
    assert_eq!(info.size, 14);
}

#[test]
fn get_file_info_missing_path() {
    let temp = TempDir::new().unwrap();
    let err = accessor()
        .get_file_info(&temp.path().join("gone"))
        .unwrap_err();
    assert!(matches!(err, CompassError::NotFound { .. }));
}

#[test]
fn list_files_skips_directories_and_hidden() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("a.py"), "x = 1").unwrap();
    std::fs::write(temp.path().join(".hidden.py"), "h = 1").unwrap();
    std::fs::create_dir(temp.path().join("sub")).unwrap();
    std::fs::write(temp.path().join("sub/b.py"), "y = 2").unwrap();

    let files = accessor().list_files(temp.path(), true, false).unwrap();
    let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["a.py", "b.py"]);
}

#[test]
fn list_files_includes_hidden_on_request() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(".env.py"), "k = 1").unwrap();

    let files = accessor().list_files(temp.path(), false, true).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, ".env.py");
}

#[test]
fn list_files_non_recursive_stays_shallow() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("top.py"), "t = 1").unwrap();
    std::fs::create_dir(temp.path().join("deep")).unwrap();
    std::fs::write(temp.path().join("deep/inner.py"), "i = 1").unwrap();

    let files = accessor().list_files(temp.path(), false, false).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "top.py");
}

#[test]
fn list_files_applies_ignore_patterns() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("keep.py"), "k = 1").unwrap();
    std::fs::create_dir(temp.path().join("node_modules")).unwrap();
    std::fs::write(temp.path().join("node_modules/skip.js"), "s = 1").unwrap();

    let files = accessor().list_files(temp.path(), true, false).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "keep.py");
}

#[test]
fn list_files_on_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("f.py");
    std::fs::write(&file, "x").unwrap();

    let err = accessor().list_files(&file, true, false).unwrap_err();
    assert!(matches!(err, CompassError::NotADirectory { .. }));
}

#[test]
fn bad_ignore_pattern_is_a_construction_error() {
    let config = Config {
        repositories: RepositoryConfig {
            ignore_patterns: vec!["[".to_string()],
            ..RepositoryConfig::default()
        },
        ..Config::default()
    };
    assert!(FileAccessor::new(&config).is_err());
}
