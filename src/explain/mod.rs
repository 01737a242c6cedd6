mod complexity;
mod tables;

pub use complexity::{ComplexityLabel, ComplexityReport};

use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// Result of a heuristic code explanation.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub summary: String,
    pub language: String,
    pub patterns: Vec<String>,
    pub risks: Vec<String>,
    pub complexity: ComplexityReport,
    pub suggestions: Vec<String>,
    pub metadata: ExplanationMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExplanationMetadata {
    pub path: String,
    pub start_line: usize,
    pub end_line: usize,
    pub lines_of_code: usize,
}

/// Rule-based code explainer: language, topic and risk classification,
/// complexity scoring and canned suggestions, all from fixed keyword
/// tables. Best-effort by design; no parsing, no I/O.
pub struct Explainer {
    function_def: Regex,
    class_def: Regex,
}

impl Explainer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            function_def: Regex::new(r"def\s+\w+").expect("Invalid regex"),
            class_def: Regex::new(r"class\s+\w+").expect("Invalid regex"),
        }
    }

    /// Explain a code fragment. Pure: operates only on the supplied string.
    #[must_use]
    pub fn explain(&self, code: &str, path: &str, start_line: usize, end_line: usize) -> Explanation {
        let language = detect_language(code);
        let patterns = match_tables(code, tables::TOPIC_PATTERNS);
        let risks = match_tables(code, tables::RISK_PATTERNS);
        let function_count = self.function_def.find_iter(code).count();
        let complexity = ComplexityReport::measure(code, function_count);
        let suggestions = self.suggestions(code, &risks, &complexity);
        let summary = self.summary(code, &patterns, language);

        debug!(language, patterns = patterns.len(), "code explanation completed");

        Explanation {
            summary,
            language: language.to_string(),
            patterns,
            risks,
            complexity,
            suggestions,
            metadata: ExplanationMetadata {
                path: path.to_string(),
                start_line,
                end_line,
                lines_of_code: code.split('\n').count(),
            },
        }
    }

    /// Risk remediations first (table order), then complexity triggers,
    /// then literal style triggers. Order is part of the contract.
    fn suggestions(
        &self,
        code: &str,
        risks: &[String],
        complexity: &ComplexityReport,
    ) -> Vec<String> {
        let mut out = Vec::new();

        for (risk, suggestion) in tables::RISK_SUGGESTIONS {
            if risks.iter().any(|r| r == risk) {
                out.push((*suggestion).to_string());
            }
        }

        if complexity.cyclomatic_complexity > 10 {
            out.push("Consider breaking down complex functions into smaller ones".to_string());
        }
        if complexity.max_nesting_depth > 4 {
            out.push("Reduce nesting depth for better readability".to_string());
        }
        if complexity.function_count == 0 && complexity.code_lines > 20 {
            out.push("Consider organizing code into functions".to_string());
        }

        if code.contains("TODO") {
            out.push("Complete TODO items".to_string());
        }
        if code.contains("console.log") {
            out.push("Use proper logging instead of console.log".to_string());
        }
        if code.contains("var ") {
            out.push("Use let/const instead of var".to_string());
        }
        if code.contains("print(") {
            out.push("Use proper logging instead of print statements".to_string());
        }

        out
    }

    fn summary(&self, code: &str, patterns: &[String], language: &str) -> String {
        let line_count = code.split('\n').filter(|l| !l.trim().is_empty()).count();
        let mut parts = vec![format!("This is {line_count} lines of {language} code")];

        match patterns {
            [] => {}
            [only] => parts.push(format!("that appears to handle {only}")),
            [init @ .., last] => {
                parts.push(format!("that involves {} and {last}", init.join(", ")));
            }
        }

        if code.contains("def ") {
            let count = self.function_def.find_iter(code).count();
            parts.push(format!("with {count} function(s)"));
        }
        if code.contains("class ") {
            let count = self.class_def.find_iter(code).count();
            parts.push(format!("and {count} class(es)"));
        }
        if code.contains("import ") {
            parts.push("that imports external dependencies".to_string());
        }

        parts.join(". ") + "."
    }
}

impl Default for Explainer {
    fn default() -> Self {
        Self::new()
    }
}

/// First language whose telltale table has any substring present in the
/// code, case-insensitive; table order breaks ties.
fn detect_language(code: &str) -> &'static str {
    let lower = code.to_lowercase();
    tables::LANGUAGE_PATTERNS
        .iter()
        .find(|(_, telltales)| telltales.iter().any(|t| lower.contains(&t.to_lowercase())))
        .map_or("unknown", |(language, _)| language)
}

fn match_tables(code: &str, table: &[(&str, &[&str])]) -> Vec<String> {
    let lower = code.to_lowercase();
    table
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(name, _)| (*name).to_string())
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
