use std::fmt::Write;

use crate::access::FileInfo;
use crate::error::Result;
use crate::explain::Explanation;
use crate::tools::{ReadFileResponse, SearchResponse, TodoResponse};

use super::Renderer;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextRenderer {
    use_colors: bool,
}

impl TextRenderer {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn location(&self, path: &str, line: usize) -> String {
        self.paint(ansi::CYAN, &format!("{path}:{line}"))
    }
}

impl Renderer for TextRenderer {
    fn render_search(&self, response: &SearchResponse) -> Result<String> {
        let mut out = String::new();
        if response.items.is_empty() {
            let _ = writeln!(out, "No matches for '{}'", response.query);
            return Ok(out);
        }

        for hit in &response.items {
            let _ = writeln!(
                out,
                "{}  {}",
                self.location(&hit.path, hit.line),
                hit.snippet
            );
        }
        let _ = writeln!(out, "\n{} match(es) for '{}'", response.total, response.query);
        Ok(out)
    }

    fn render_read(&self, response: &ReadFileResponse) -> Result<String> {
        let mut out = response.content.clone();
        if !out.ends_with('\n') {
            out.push('\n');
        }
        let footer = format!(
            "[offset {}, {} chars of {} bytes total]",
            response.offset, response.length, response.total_bytes
        );
        let _ = writeln!(out, "{}", self.paint(ansi::DIM, &footer));
        Ok(out)
    }

    fn render_explanation(&self, explanation: &Explanation) -> Result<String> {
        let mut out = String::new();
        let meta = &explanation.metadata;
        if !meta.path.is_empty() {
            let _ = writeln!(out, "{}", self.location(&meta.path, meta.start_line));
        }
        let _ = writeln!(out, "{}", explanation.summary);
        let _ = writeln!(out, "\nLanguage: {}", explanation.language);

        let c = &explanation.complexity;
        let _ = writeln!(
            out,
            "Complexity: {} (cyclomatic {}, nesting {}, {} function(s), {} code line(s))",
            c.complexity_score,
            c.cyclomatic_complexity,
            c.max_nesting_depth,
            c.function_count,
            c.code_lines
        );

        if !explanation.risks.is_empty() {
            let _ = writeln!(out, "\nRisks:");
            for risk in &explanation.risks {
                let _ = writeln!(out, "  {} {risk}", self.paint(ansi::YELLOW, "!"));
            }
        }
        if !explanation.suggestions.is_empty() {
            let _ = writeln!(out, "\nSuggestions:");
            for suggestion in &explanation.suggestions {
                let _ = writeln!(out, "  - {suggestion}");
            }
        }
        Ok(out)
    }

    fn render_todos(&self, response: &TodoResponse) -> Result<String> {
        let mut out = String::new();
        if response.items.is_empty() {
            let _ = writeln!(out, "No taxonomy comments found");
            return Ok(out);
        }

        for item in &response.items {
            let _ = writeln!(
                out,
                "{}  {} {}",
                self.location(&item.path, item.line),
                self.paint(ansi::YELLOW, &item.kind),
                item.text
            );
        }
        let _ = writeln!(out, "\n{} item(s)", response.total);
        Ok(out)
    }

    fn render_info(&self, info: &FileInfo) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(out, "{}", info.path);
        let kind = if info.is_directory { "directory" } else { "file" };
        let _ = writeln!(out, "  type:        {kind}");
        let _ = writeln!(out, "  size:        {} bytes ({} MB)", info.size, info.size_mb);
        let _ = writeln!(out, "  language:    {}", info.language);
        let _ = writeln!(out, "  permissions: {}", info.permissions);
        let _ = writeln!(out, "  readable:    {}", info.is_readable);
        Ok(out)
    }

    fn render_listing(&self, files: &[FileInfo]) -> Result<String> {
        let mut out = String::new();
        for info in files {
            let _ = writeln!(out, "{:>10}  {}", info.size, info.path);
        }
        let _ = writeln!(out, "\n{} file(s)", files.len());
        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
