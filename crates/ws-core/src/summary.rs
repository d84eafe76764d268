//! Per-day and per-report customer totals.
//!
//! A report is split into [`Day`]s at every change of date, in log order.
//! Items are never sorted: the builder already guarantees that items of one
//! date are contiguous.

use chrono::{NaiveDate, TimeDelta};

use crate::builder::{Report, WorkItem};

/// Customer durations, kept in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomerTotals {
    entries: Vec<(String, TimeDelta)>,
}

impl CustomerTotals {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds `duration` to `customer`, appending it if not yet present.
    pub fn add(&mut self, customer: &str, duration: TimeDelta) {
        match self.entries.iter_mut().find(|(name, _)| name == customer) {
            Some((_, total)) => *total += duration,
            None => self.entries.push((customer.to_string(), duration)),
        }
    }

    pub fn get(&self, customer: &str) -> Option<TimeDelta> {
        self.entries
            .iter()
            .find(|(name, _)| name == customer)
            .map(|(_, total)| *total)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, TimeDelta)> {
        self.entries
            .iter()
            .map(|(name, total)| (name.as_str(), *total))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum over all customers.
    pub fn grand_total(&self) -> TimeDelta {
        self.entries
            .iter()
            .fold(TimeDelta::zero(), |acc, (_, total)| acc + *total)
    }
}

impl<'a> FromIterator<&'a WorkItem> for CustomerTotals {
    fn from_iter<T: IntoIterator<Item = &'a WorkItem>>(iter: T) -> Self {
        let mut totals = Self::new();
        for item in iter {
            totals.add(&item.customer, item.duration());
        }
        totals
    }
}

/// A contiguous run of same-date work items within a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    items: Vec<WorkItem>,
    totals: CustomerTotals,
}

impl Day {
    /// Returns `None` for an empty item list: a day always has work.
    pub fn new(items: Vec<WorkItem>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        let totals = items.iter().collect();
        Some(Self { items, totals })
    }

    pub fn date(&self) -> NaiveDate {
        self.items[0].date()
    }

    pub fn items(&self) -> &[WorkItem] {
        &self.items
    }

    pub const fn totals(&self) -> &CustomerTotals {
        &self.totals
    }
}

/// A report broken into days, with totals across the whole report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    days: Vec<Day>,
    totals: CustomerTotals,
}

impl ReportSummary {
    /// Report totals are accumulated from the day totals.
    pub fn new(days: Vec<Day>) -> Self {
        let mut totals = CustomerTotals::new();
        for day in &days {
            for (customer, total) in day.totals().iter() {
                totals.add(customer, total);
            }
        }
        Self { days, totals }
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub const fn totals(&self) -> &CustomerTotals {
        &self.totals
    }
}

/// Splits a report's items into days at each change of date.
pub fn group_by_day(items: &[WorkItem]) -> Vec<Day> {
    let mut days = Vec::new();
    let mut running: Vec<WorkItem> = Vec::new();
    for item in items {
        if running.last().is_some_and(|last| last.date() != item.date()) {
            days.extend(Day::new(std::mem::take(&mut running)));
        }
        running.push(item.clone());
    }
    days.extend(Day::new(running));
    days
}

/// Summarizes a single report.
pub fn summarize_report(report: &Report) -> ReportSummary {
    ReportSummary::new(group_by_day(report.items()))
}

/// Summarizes every report, preserving order.
pub fn summarize(reports: &[Report]) -> Vec<ReportSummary> {
    let summaries: Vec<_> = reports.iter().map(summarize_report).collect();
    tracing::debug!(reports = summaries.len(), "summarized reports");
    summaries
}
