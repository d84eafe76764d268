//! Report command: the whole read → parse → filter → summarize → print pipeline.
//!
//! Output is either the fixed plain-text layout or JSON (`--json`).

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use serde::Serialize;
use ws_core::{CustomerTotals, Report, ReportSummary};

/// Which part of the log to report on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Recency index of a single period, 0 being the most recent.
    pub week: Option<usize>,
    /// Exact customer name to keep.
    pub customer: Option<String>,
}

/// Parses log text and applies the selection, returning the summaries to print.
pub fn generate_report_data(source: &str, selection: &Selection) -> Result<Vec<ReportSummary>> {
    let reports = ws_core::parse_workstamps(source.lines())?;
    select_reports(reports, selection)
}

/// Applies the recency and customer filters to parsed reports, then summarizes.
pub fn select_reports(reports: Vec<Report>, selection: &Selection) -> Result<Vec<ReportSummary>> {
    let reports = ws_core::filter_by_recency(selection.week, reports)?;
    let reports = ws_core::filter_by_customer(selection.customer.as_deref(), reports);
    Ok(ws_core::summarize(&reports))
}

// ========== JSON Output ==========

/// JSON report structure.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub days: Vec<JsonDay>,
    pub totals: Vec<JsonTotal>,
}

#[derive(Debug, Serialize)]
pub struct JsonDay {
    pub date: NaiveDate,
    pub items: Vec<JsonItem>,
    pub totals: Vec<JsonTotal>,
}

#[derive(Debug, Serialize)]
pub struct JsonItem {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub customer: String,
    pub description: String,
    pub minutes: i64,
}

#[derive(Debug, Serialize)]
pub struct JsonTotal {
    pub customer: String,
    pub minutes: i64,
}

fn json_totals(totals: &CustomerTotals) -> Vec<JsonTotal> {
    totals
        .iter()
        .map(|(customer, total)| JsonTotal {
            customer: customer.to_string(),
            minutes: total.num_minutes(),
        })
        .collect()
}

fn json_report(summary: &ReportSummary) -> JsonReport {
    let days = summary
        .days()
        .iter()
        .map(|day| JsonDay {
            date: day.date(),
            items: day
                .items()
                .iter()
                .map(|item| JsonItem {
                    start: item.start,
                    end: item.end,
                    customer: item.customer.clone(),
                    description: item.description.clone(),
                    minutes: item.duration().num_minutes(),
                })
                .collect(),
            totals: json_totals(day.totals()),
        })
        .collect();

    JsonReport {
        days,
        totals: json_totals(summary.totals()),
    }
}

/// Formats summaries as a pretty-printed JSON array, one object per report.
pub fn format_report_json(summaries: &[ReportSummary]) -> Result<String> {
    let reports: Vec<_> = summaries.iter().map(json_report).collect();
    Ok(serde_json::to_string_pretty(&reports)?)
}

// ========== Public Interface ==========

/// Runs the report command.
pub fn run(path: &Path, selection: &Selection, json: bool) -> Result<()> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let reports = ws_core::parse_workstamps(source.lines())
        .with_context(|| format!("failed to parse {}", path.display()))?;
    let summaries = select_reports(reports, selection)?;

    let total: TimeDelta = summaries
        .iter()
        .fold(TimeDelta::zero(), |acc, s| acc + s.totals().grand_total());
    tracing::debug!(
        reports = summaries.len(),
        minutes = total.num_minutes(),
        "report ready"
    );

    let output = if json {
        format_report_json(&summaries)?
    } else {
        ws_core::format_report(&summaries)
    };
    println!("{output}");

    Ok(())
}
