//! Sales totals aggregation.
//!
//! One pass over the records, summing each numeric column:
//!
//! ```text
//! total_gratuity = total_cc_gratuity + total_cash_gratuity
//! ```

use klimrod_types::{SalesRecord, Totals};

/// Sum every numeric field across `records`.
///
/// An empty slice yields all-zero totals.
pub fn compute_totals(records: &[SalesRecord]) -> Totals {
    let mut totals = records.iter().fold(Totals::default(), |mut acc, r| {
        acc.total_net_sales += r.net_sales;
        acc.total_cash_sales += r.cash_sales;
        acc.total_cc_sales += r.cc_sales;
        acc.total_cc_gratuity += r.cc_gratuity;
        acc.total_cash_gratuity += r.cash_gratuity;
        acc.total_points += r.points;
        acc
    });
    totals.total_gratuity = totals.total_cc_gratuity + totals.total_cash_gratuity;

    tracing::trace!(
        records = records.len(),
        total_gratuity = totals.total_gratuity,
        total_points = totals.total_points,
        "sales totals computed"
    );

    totals
}
