//! Period sales report.
//!
//! Rolls one restaurant's closed events within a date range (and optionally
//! one shift) up into gratuity and sales totals plus a per-employee
//! leaderboard.

use std::collections::BTreeMap;

use klimrod_types::{ClosedEvent, EmployeeTotal, PeriodFilter, PeriodReport, PeriodTotals};

use crate::{Result, TipError};

/// Build a period report from `events`.
///
/// Matching events are returned oldest first. Employee totals are sorted by
/// descending total, then by name.
///
/// # Errors
///
/// - [`TipError::InvalidPeriod`] if `filter.start` is after `filter.end`
pub fn period_report(events: &[ClosedEvent], filter: &PeriodFilter) -> Result<PeriodReport> {
    if filter.start > filter.end {
        return Err(TipError::InvalidPeriod {
            start: filter.start,
            end: filter.end,
        });
    }

    let mut matching = events
        .iter()
        .filter(|e| filter.matches(e))
        .cloned()
        .collect::<Vec<_>>();
    matching.sort_by_key(|e| e.info.date);

    let totals = matching
        .iter()
        .fold(PeriodTotals::default(), |mut acc, e| {
            acc.cc_gratuity += e.totals.total_cc_gratuity;
            acc.cash_gratuity += e.totals.total_cash_gratuity;
            acc.total_gratuity += e.totals.total_gratuity;
            acc.net_sales += e.totals.total_net_sales;
            acc
        });

    let mut by_employee: BTreeMap<&str, EmployeeTotal> = BTreeMap::new();
    for row in matching.iter().flat_map(|e| &e.tip_distribution) {
        let entry = by_employee
            .entry(row.employee.as_str())
            .or_insert_with(|| EmployeeTotal {
                employee: row.employee.clone(),
                ..Default::default()
            });
        entry.cc_gratuity += row.cc_gratuity;
        entry.cash_gratuity += row.cash_gratuity;
        entry.total += row.tips;
    }
    let mut employee_totals = by_employee.into_values().collect::<Vec<_>>();
    employee_totals.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.employee.cmp(&b.employee))
    });

    tracing::debug!(
        restaurant_id = ?filter.restaurant_id,
        start = %filter.start,
        end = %filter.end,
        shift = ?filter.shift,
        events = matching.len(),
        employees = employee_totals.len(),
        "period report built"
    );

    Ok(PeriodReport {
        filter: filter.clone(),
        events: matching,
        totals,
        employee_totals,
    })
}
