//! Error types for parsing and filtering workstamps logs.

use std::fmt;

use thiserror::Error;

/// Ways a token sequence can violate the expected start/work/restart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralProblem {
    /// A report did not open with a start entry.
    MissingStart,
    /// A start entry was not followed by a work entry.
    MissingWork,
    /// A work entry is timestamped before the entry preceding it.
    TimeWentBackwards,
}

impl StructuralProblem {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingStart => "first entry must be a start",
            Self::MissingWork => "start must be followed by work",
            Self::TimeWentBackwards => "entry is earlier than the previous entry",
        }
    }
}

impl fmt::Display for StructuralProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fatal errors raised while turning log lines into reports.
///
/// `line` is the 0-based index of the physical line in the input; messages
/// show it 1-based.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The timestamp prefix of a line is not `YYYY-MM-DD HH:MM`.
    #[error("line {}: invalid timestamp in {text:?}, expected YYYY-MM-DD HH:MM", .line + 1)]
    Format { line: usize, text: String },

    /// The token order violates the report state machine.
    #[error("line {}: {problem}", .line + 1)]
    Structural {
        line: usize,
        problem: StructuralProblem,
    },
}

impl ParseError {
    /// The 0-based line index the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Format { line, .. } | Self::Structural { line, .. } => *line,
        }
    }
}

/// Errors raised when narrowing the list of reports.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    /// The recency index points past the oldest report.
    #[error("no report at index {index}, only {available} report(s) available")]
    NoSuchReport { index: usize, available: usize },
}
