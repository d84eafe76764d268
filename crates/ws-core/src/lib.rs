//! Core logic for `.workstamps` time reports.
//!
//! This crate contains the pipeline that turns a time log into reports:
//! - Tokenizing: one typed token per non-blank line
//! - Building: a state machine grouping work items into reports at restart markers
//! - Filtering: picking a report by recency and/or a single customer
//! - Summarizing: per-day and per-report customer totals
//! - Formatting: the fixed plain-text report layout

mod builder;
mod error;
mod filter;
pub mod format;
mod summary;
pub mod token;

pub use builder::{Report, ReportBuilder, WorkItem, build_reports, parse_workstamps};
pub use error::{FilterError, ParseError, StructuralProblem};
pub use filter::{filter_by_customer, filter_by_recency};
pub use format::{format_duration, format_report, report_lines};
pub use summary::{CustomerTotals, Day, ReportSummary, group_by_day, summarize, summarize_report};
pub use token::{Token, TokenKind, tokenize};
