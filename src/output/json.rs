use serde::Serialize;

use crate::access::FileInfo;
use crate::error::Result;
use crate::explain::Explanation;
use crate::tools::{ReadFileResponse, SearchResponse, TodoResponse};

use super::Renderer;

/// Pretty-printed JSON, one document per invocation.
pub struct JsonRenderer;

fn pretty<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

impl Renderer for JsonRenderer {
    fn render_search(&self, response: &SearchResponse) -> Result<String> {
        pretty(response)
    }

    fn render_read(&self, response: &ReadFileResponse) -> Result<String> {
        pretty(response)
    }

    fn render_explanation(&self, explanation: &Explanation) -> Result<String> {
        pretty(explanation)
    }

    fn render_todos(&self, response: &TodoResponse) -> Result<String> {
        pretty(response)
    }

    fn render_info(&self, info: &FileInfo) -> Result<String> {
        pretty(info)
    }

    fn render_listing(&self, files: &[FileInfo]) -> Result<String> {
        pretty(&files)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
