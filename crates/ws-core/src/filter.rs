//! Narrowing the report list before aggregation.

use crate::builder::Report;
use crate::error::FilterError;

/// Keeps a single report picked by recency, or all reports for `None`.
///
/// Index 0 is the most recent (last) report, 1 the one before it, and so on.
pub fn filter_by_recency(
    index: Option<usize>,
    mut reports: Vec<Report>,
) -> Result<Vec<Report>, FilterError> {
    let Some(index) = index else {
        return Ok(reports);
    };

    let available = reports.len();
    let position = available
        .checked_sub(index)
        .and_then(|remaining| remaining.checked_sub(1))
        .ok_or(FilterError::NoSuchReport { index, available })?;

    tracing::debug!(index, position, available, "selected report by recency");
    Ok(vec![reports.swap_remove(position)])
}

/// Keeps only the work items of `customer`, or everything for `None`.
///
/// Reports left without items are dropped.
pub fn filter_by_customer(customer: Option<&str>, reports: Vec<Report>) -> Vec<Report> {
    let Some(customer) = customer else {
        return reports;
    };

    let filtered: Vec<Report> = reports
        .into_iter()
        .map(|report| {
            report
                .into_items()
                .into_iter()
                .filter(|item| item.customer == customer)
                .collect::<Report>()
        })
        .filter(|report| !report.is_empty())
        .collect();

    tracing::debug!(customer, reports = filtered.len(), "filtered by customer");
    filtered
}
