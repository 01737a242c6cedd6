use serde::Serialize;

/// Keywords whose presence on a line bumps the cyclomatic count. Naive
/// substring test per line; over-counts keywords embedded in identifiers,
/// which is the accepted contract of this heuristic.
const COMPLEXITY_KEYWORDS: &[&str] = &[
    "if", "elif", "else", "for", "while", "try", "except", "and", "or",
];

/// Trimmed prefixes that open a nested block.
const BLOCK_OPENERS: &[&str] = &["if ", "for ", "while ", "try:", "with ", "def ", "class "];

/// Trimmed prefixes that continue the current block at the same level.
const BLOCK_CONTINUATIONS: &[&str] = &["else:", "elif ", "except:", "finally:"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplexityLabel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl ComplexityLabel {
    /// Bucket the combined cyclomatic + nesting + function score.
    #[must_use]
    pub const fn from_score(score: usize) -> Self {
        match score {
            0..=5 => Self::Low,
            6..=15 => Self::Medium,
            16..=30 => Self::High,
            _ => Self::VeryHigh,
        }
    }
}

impl std::fmt::Display for ComplexityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        };
        write!(f, "{label}")
    }
}

/// Heuristic complexity metrics for a code fragment.
#[derive(Debug, Clone, Serialize)]
pub struct ComplexityReport {
    pub total_lines: usize,
    /// Non-blank lines.
    pub code_lines: usize,
    pub cyclomatic_complexity: usize,
    pub max_nesting_depth: usize,
    pub function_count: usize,
    pub complexity_score: ComplexityLabel,
}

impl ComplexityReport {
    /// Compute the metrics. This is deliberately not a parser: keyword
    /// occurrence counting and an indentation-agnostic nesting counter,
    /// calibrated to fixed suggestion thresholds downstream.
    #[must_use]
    pub fn measure(code: &str, function_count: usize) -> Self {
        let lines: Vec<&str> = code.split('\n').collect();
        let total_lines = lines.len();
        let code_lines = lines.iter().filter(|l| !l.trim().is_empty()).count();

        let mut cyclomatic = 1usize;
        for line in &lines {
            let lower = line.to_lowercase();
            for keyword in COMPLEXITY_KEYWORDS {
                if lower.contains(keyword) {
                    cyclomatic += 1;
                }
            }
        }

        let mut max_nesting = 0usize;
        let mut current = 0usize;
        for line in &lines {
            let trimmed = line.trim();
            if BLOCK_OPENERS.iter().any(|p| trimmed.starts_with(p)) {
                current += 1;
                max_nesting = max_nesting.max(current);
            } else if BLOCK_CONTINUATIONS.iter().any(|p| trimmed.starts_with(p)) {
                // Same level.
            } else if !trimmed.is_empty() && !trimmed.starts_with('#') {
                current = current.saturating_sub(1);
            }
        }

        Self {
            total_lines,
            code_lines,
            cyclomatic_complexity: cyclomatic,
            max_nesting_depth: max_nesting,
            function_count,
            complexity_score: ComplexityLabel::from_score(
                cyclomatic + max_nesting + function_count,
            ),
        }
    }
}

#[cfg(test)]
#[path = "complexity_tests.rs"]
mod tests;
