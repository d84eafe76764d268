//! Plain-text rendering of report summaries.

use chrono::TimeDelta;

use crate::summary::{CustomerTotals, Day, ReportSummary};

/// Closes the day listing of every report.
const REPORT_SEPARATOR: &str = "---------------------------------------------";

/// Prefix of the report-wide customer total lines.
const REPORT_TOTALS_PREFIX: &str = "restart totals: ";

/// Formats a duration as `H:MM`, hours unbounded.
///
/// # Panics
///
/// Work items always span whole minutes, so a negative duration or one
/// with a sub-minute remainder means the data model is broken.
pub fn format_duration(duration: TimeDelta) -> String {
    let seconds = duration.num_seconds();
    assert!(
        seconds >= 0 && seconds % 60 == 0 && duration.subsec_nanos() == 0,
        "duration {duration} is not a non-negative whole number of minutes"
    );
    let minutes = seconds / 60;
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

/// Renders summaries as output lines, without trailing newlines.
pub fn report_lines(summaries: &[ReportSummary]) -> Vec<String> {
    let mut lines = Vec::new();
    for summary in summaries {
        for day in summary.days() {
            day_lines(day, &mut lines);
        }
        lines.push(REPORT_SEPARATOR.to_string());
        totals_lines(summary.totals(), REPORT_TOTALS_PREFIX, &mut lines);
        lines.push(String::new());
    }
    lines
}

/// Renders summaries as one newline-joined string.
pub fn format_report(summaries: &[ReportSummary]) -> String {
    report_lines(summaries).join("\n")
}

fn day_lines(day: &Day, lines: &mut Vec<String>) {
    lines.push(format!("---------- {} ----------", day.date().format("%Y-%m-%d")));
    lines.extend(day.items().iter().map(|item| {
        format!(
            "{} {} {}",
            format_duration(item.duration()),
            item.customer,
            item.description
        )
    }));
    totals_lines(day.totals(), "", lines);
}

fn totals_lines(totals: &CustomerTotals, prefix: &str, lines: &mut Vec<String>) {
    lines.extend(
        totals
            .iter()
            .map(|(customer, total)| format!("{prefix}{customer}: {}", format_duration(total))),
    );
}
