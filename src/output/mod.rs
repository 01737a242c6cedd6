mod json;
mod text;

pub use json::JsonRenderer;
pub use text::{ColorMode, TextRenderer};

use crate::access::FileInfo;
use crate::error::Result;
use crate::explain::Explanation;
use crate::tools::{ReadFileResponse, SearchResponse, TodoResponse};

/// Trait for rendering tool responses into a displayable string.
pub trait Renderer {
    /// # Errors
    /// Returns an error if serialization fails.
    fn render_search(&self, response: &SearchResponse) -> Result<String>;

    /// # Errors
    /// Returns an error if serialization fails.
    fn render_read(&self, response: &ReadFileResponse) -> Result<String>;

    /// # Errors
    /// Returns an error if serialization fails.
    fn render_explanation(&self, explanation: &Explanation) -> Result<String>;

    /// # Errors
    /// Returns an error if serialization fails.
    fn render_todos(&self, response: &TodoResponse) -> Result<String>;

    /// # Errors
    /// Returns an error if serialization fails.
    fn render_info(&self, info: &FileInfo) -> Result<String>;

    /// # Errors
    /// Returns an error if serialization fails.
    fn render_listing(&self, files: &[FileInfo]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[must_use]
pub fn renderer_for(format: OutputFormat, color: ColorMode) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer::new(color)),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
