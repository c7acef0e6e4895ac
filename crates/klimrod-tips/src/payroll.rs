//! Timecard hours and monthly payroll.
//!
//! ```text
//! hours    = (shift_end - shift_start) in minutes / 60   (+24h past midnight)
//! earnings = hours * hourly_rate
//! gross    = sum(earnings) over the employee's timecards in the month
//! taxes    = gross * tax_percentage / 100
//! net      = gross - taxes
//! ```

use chrono::{Datelike, NaiveDate, NaiveTime};
use klimrod_types::{Amount, Employee, PayrollEntry, PayrollStatus, Timecard};

use crate::{Result, TipError};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Hours between `start` and `end`. An end earlier than the start is taken
/// to fall on the next day.
pub fn shift_hours(start: NaiveTime, end: NaiveTime) -> f64 {
    let minutes = (end - start).num_minutes();
    let minutes = if minutes < 0 {
        minutes + MINUTES_PER_DAY
    } else {
        minutes
    };
    minutes as f64 / 60.0
}

pub fn timecard_hours(card: &Timecard) -> f64 {
    shift_hours(card.shift_start, card.shift_end)
}

pub fn timecard_earnings(card: &Timecard) -> Amount {
    timecard_hours(card) * card.hourly_rate
}

/// Reject timecards that cannot be paid.
///
/// # Errors
///
/// - [`TipError::InvalidRate`] if the hourly rate is not a positive number
pub fn validate_timecard(card: &Timecard) -> Result<()> {
    if !(card.hourly_rate.is_finite() && card.hourly_rate > 0.0) {
        return Err(TipError::InvalidRate {
            what: "hourly rate",
            value: card.hourly_rate,
        });
    }
    Ok(())
}

/// Build the payroll for the month containing `month`.
///
/// Every employee gets an entry, including those with no hours. Timecards
/// for people not in `employees` are ignored.
///
/// # Errors
///
/// - [`TipError::InvalidRate`] if `tax_percentage` is outside 0..=100, or
///   a timecard in the month has an invalid hourly rate
pub fn generate_payroll(
    employees: &[Employee],
    timecards: &[Timecard],
    month: NaiveDate,
    tax_percentage: f64,
) -> Result<Vec<PayrollEntry>> {
    if !(0.0..=100.0).contains(&tax_percentage) {
        return Err(TipError::InvalidRate {
            what: "tax percentage",
            value: tax_percentage,
        });
    }

    let in_month = timecards
        .iter()
        .filter(|c| c.date.year() == month.year() && c.date.month() == month.month())
        .collect::<Vec<_>>();
    for card in &in_month {
        validate_timecard(card)?;
    }

    let period = month.format("%Y-%m").to_string();
    let entries = employees
        .iter()
        .map(|employee| {
            let (total_hours, gross_salary) = in_month
                .iter()
                .filter(|c| c.employee_id == employee.id)
                .fold((0.0, 0.0), |(hours, gross), c| {
                    (hours + timecard_hours(c), gross + timecard_earnings(c))
                });
            let taxes_deductions = gross_salary * tax_percentage / 100.0;
            PayrollEntry {
                employee_id: employee.id.clone(),
                employee_name: employee.name.clone(),
                period: period.clone(),
                total_hours,
                gross_salary,
                taxes_deductions,
                net_salary: gross_salary - taxes_deductions,
                status: PayrollStatus::Pending,
            }
        })
        .collect::<Vec<_>>();

    let unknown = in_month
        .iter()
        .filter(|c| !employees.iter().any(|e| e.id == c.employee_id))
        .count();
    if unknown > 0 {
        tracing::warn!(%period, unknown, "timecards for unknown employees skipped");
    }
    tracing::debug!(
        %period,
        employees = entries.len(),
        timecards = in_month.len(),
        tax_percentage,
        "payroll generated"
    );

    Ok(entries)
}
