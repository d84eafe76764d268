//! Report builder.
//!
//! Turns the token stream into reports of [`WorkItem`]s. Each work entry
//! bills the time since the previous timestamped entry, so the items of a
//! report tile time without gaps or overlaps. Restart markers close the
//! current report.
//!
//! # State Machine
//!
//! | State          | Token   | Next           |
//! |----------------|---------|----------------|
//! | `ExpectStart`  | start   | `ExpectWork`   |
//! | `ExpectWork`   | work    | `Accumulating` |
//! | `Accumulating` | work    | `Accumulating` |
//! | `Accumulating` | start   | `ExpectWork`   |
//! | `Accumulating` | restart | `ExpectStart`  |
//!
//! Any other combination is a [`ParseError::Structural`].

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::error::{ParseError, StructuralProblem};
use crate::token::{Token, TokenKind, tokenize};

/// Time billed to a customer between two consecutive log entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub customer: String,
    pub description: String,
}

impl WorkItem {
    /// Elapsed time between the previous entry and this one.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// The day the work is attributed to, taken from its end.
    pub fn date(&self) -> NaiveDate {
        self.end.date()
    }
}

/// Work items between two restart markers, in log order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    items: Vec<WorkItem>,
}

impl Report {
    pub const fn new(items: Vec<WorkItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[WorkItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<WorkItem> {
        self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<WorkItem> for Report {
    fn from_iter<T: IntoIterator<Item = WorkItem>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Parser state between tokens.
///
/// `anchor` is where the next work item starts: the last start timestamp
/// or the end of the previous item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Waiting for the start entry that opens a period.
    ExpectStart,
    /// A start was seen; the next entry must be work.
    ExpectWork { anchor: NaiveDateTime },
    /// At least one work item follows the last start.
    Accumulating { anchor: NaiveDateTime },
}

/// Incrementally builds reports from tokens.
#[derive(Debug)]
pub struct ReportBuilder {
    state: State,
    current: Vec<WorkItem>,
    reports: Vec<Report>,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportBuilder {
    pub const fn new() -> Self {
        Self {
            state: State::ExpectStart,
            current: Vec::new(),
            reports: Vec::new(),
        }
    }

    /// Applies one token. Errors are fatal: the builder must not be reused.
    pub fn push(&mut self, token: Token) -> Result<(), ParseError> {
        let line = token.line;
        self.state = match (self.state, token.kind) {
            (State::ExpectStart | State::Accumulating { .. }, TokenKind::Start { at }) => {
                State::ExpectWork { anchor: at }
            }
            (State::ExpectStart, _) => {
                return Err(structural(line, StructuralProblem::MissingStart));
            }
            (
                State::ExpectWork { anchor } | State::Accumulating { anchor },
                TokenKind::Work {
                    at,
                    customer,
                    description,
                },
            ) => {
                if at < anchor {
                    return Err(structural(line, StructuralProblem::TimeWentBackwards));
                }
                tracing::trace!(line, %customer, start = %anchor, end = %at, "work item");
                self.current.push(WorkItem {
                    start: anchor,
                    end: at,
                    customer,
                    description,
                });
                State::Accumulating { anchor: at }
            }
            (State::ExpectWork { .. }, _) => {
                return Err(structural(line, StructuralProblem::MissingWork));
            }
            (State::Accumulating { .. }, TokenKind::Restart) => {
                self.flush();
                State::ExpectStart
            }
        };
        Ok(())
    }

    /// Flushes the pending report and returns all reports in log order.
    pub fn finish(mut self) -> Vec<Report> {
        self.flush();
        self.reports
    }

    fn flush(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let items = std::mem::take(&mut self.current);
        tracing::debug!(
            report = self.reports.len(),
            items = items.len(),
            "report complete"
        );
        self.reports.push(Report::new(items));
    }
}

const fn structural(line: usize, problem: StructuralProblem) -> ParseError {
    ParseError::Structural { line, problem }
}

/// Builds reports from a token stream, stopping at the first error.
pub fn build_reports<I>(tokens: I) -> Result<Vec<Report>, ParseError>
where
    I: IntoIterator<Item = Result<Token, ParseError>>,
{
    let mut builder = ReportBuilder::new();
    let mut count = 0_usize;
    for token in tokens {
        builder.push(token?)?;
        count += 1;
    }
    let reports = builder.finish();
    tracing::debug!(tokens = count, reports = reports.len(), "tokens consumed");
    Ok(reports)
}

/// Parses the lines of a workstamps log into reports.
pub fn parse_workstamps<I>(lines: I) -> Result<Vec<Report>, ParseError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let reports = build_reports(tokenize(lines))?;
    tracing::debug!(reports = reports.len(), "parsed workstamps");
    Ok(reports)
}
