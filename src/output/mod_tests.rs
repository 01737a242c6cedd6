use super::*;
use std::str::FromStr;

#[test]
fn parses_known_formats() {
    assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
    assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
}

#[test]
fn rejects_unknown_format() {
    let err = OutputFormat::from_str("yaml").unwrap_err();
    assert!(err.contains("yaml"));
}

#[test]
fn default_format_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn renderer_for_dispatches_by_format() {
    let renderer = renderer_for(OutputFormat::Json, ColorMode::Never);
    let rendered = renderer.render_listing(&[]).unwrap();
    assert_eq!(rendered.trim(), "[]");
}
