use super::*;
use crate::tools::{ReadFileResponse, TodoResponse};

#[test]
fn read_response_uses_wire_field_names() {
    let response = ReadFileResponse {
        content: "x = 1".to_string(),
        total_bytes: 5,
        offset: 0,
        length: 5,
    };

    let rendered = JsonRenderer.render_read(&response).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["content"], "x = 1");
    assert_eq!(value["total_bytes"], 5);
}

#[test]
fn todo_kind_serializes_as_type() {
    let response = TodoResponse {
        items: vec![crate::scan::TodoItem {
            path: "a.py".to_string(),
            line: 1,
            kind: "FIXME".to_string(),
            text: "broken".to_string(),
            snippet: "# FIXME: broken".to_string(),
        }],
        total: 1,
    };

    let rendered = JsonRenderer.render_todos(&response).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["items"][0]["type"], "FIXME");
    assert!(value["items"][0].get("kind").is_none());
}

#[test]
fn empty_listing_is_an_array() {
    let rendered = JsonRenderer.render_listing(&[]).unwrap();
    assert_eq!(rendered.trim(), "[]");
}
