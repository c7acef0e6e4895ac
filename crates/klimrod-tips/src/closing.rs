//! Closing an event sheet.
//!
//! Closing freezes an [`EventSheet`] into a [`ClosedEvent`]: raw sales rows
//! are coerced, rows without an employee are dropped, and every total the
//! reports need is computed once.
//!
//! ```text
//! cash_on_hand = total_cash_sales - expense_totals.total_cash
//! ```

use chrono::{DateTime, Utc};
use klimrod_types::{
    Amount, ClosedEvent, DistributionPolicy, EventSheet, FeeRecipient, Pool, SalesRecord,
    TipReport,
};

use crate::distribution::distribute;
use crate::expenses::compute_expense_totals;
use crate::{Result, TipError};

/// Even share of `amount` for each of `count` recipients; 0 with nobody.
pub fn amount_per_recipient(count: usize, amount: Amount) -> Amount {
    if count == 0 {
        0.0
    } else {
        amount / count as f64
    }
}

/// Split a flat fee equally among `recipients`.
pub fn split_other_fee(recipients: &[FeeRecipient], amount: Amount, label: Option<&str>) -> TipReport {
    let records = recipients
        .iter()
        .map(|r| SalesRecord {
            employee: r.employee.clone(),
            position: r.position.clone(),
            ..Default::default()
        })
        .collect::<Vec<_>>();

    let pool = Pool {
        amount,
        label: label.map(str::to_string),
    };
    distribute(&records, DistributionPolicy::Equal, Some(&pool))
}

/// Freeze `sheet` into a closed event for `restaurant_id`.
///
/// # Errors
///
/// - [`TipError::MissingRestaurant`] if `restaurant_id` is blank
pub fn close_event(
    sheet: &EventSheet,
    restaurant_id: &str,
    closed_at: DateTime<Utc>,
) -> Result<ClosedEvent> {
    if restaurant_id.trim().is_empty() {
        return Err(TipError::MissingRestaurant);
    }

    let sales = sheet
        .sales
        .iter()
        .cloned()
        .map(SalesRecord::from)
        .filter(|r| !r.employee.trim().is_empty())
        .collect::<Vec<_>>();
    let dropped = sheet.sales.len() - sales.len();
    if dropped > 0 {
        tracing::debug!(dropped, "sales rows without an employee left out");
    }

    let policy = sheet.distribution_policy.unwrap_or_default();
    let tips = distribute(&sales, policy, sheet.gratuity_pool.as_ref());
    let expense_totals = compute_expense_totals(&sheet.expenses);

    let other_fee_distribution = sheet.other_fee.as_ref().map(|fee| {
        let recipients = fee
            .recipients
            .iter()
            .filter(|r| !r.employee.trim().is_empty())
            .cloned()
            .collect::<Vec<_>>();
        split_other_fee(&recipients, fee.amount, fee.label.as_deref())
    });

    let cash_on_hand = tips.totals.total_cash_sales - expense_totals.total_cash;

    tracing::info!(
        restaurant_id,
        date = %sheet.info.date,
        event = %sheet.info.event_name,
        shift = %sheet.info.shift,
        employees = sales.len(),
        total_gratuity = tips.totals.total_gratuity,
        cash_on_hand,
        "event closed"
    );

    Ok(ClosedEvent {
        restaurant_id: restaurant_id.to_string(),
        closed_at,
        info: sheet.info.clone(),
        sales,
        expenses: sheet.expenses.clone(),
        totals: tips.totals,
        expense_totals,
        distribution_policy: policy,
        gratuity_pool: sheet.gratuity_pool.clone(),
        tip_distribution: tips.rows,
        other_fee_distribution,
        cash_on_hand,
    })
}
