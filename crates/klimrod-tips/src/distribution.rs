//! Gratuity and fee distribution.
//!
//! Two modes, chosen by whether a [`Pool`] is supplied:
//!
//! - **No pool**: each employee keeps the card and cash gratuity already
//!   attributed to them. Rows are passed through.
//! - **Pool**: a single amount is split by the [`DistributionPolicy`]:
//!
//! ```text
//! percentage: share = points / total_points   (0 when total_points == 0)
//! equal:      share = 1 / record_count
//! amount      = pool.amount * share
//! ```
//!
//! In both modes only rows with a positive amount are returned. Nothing is
//! rounded here; see [`crate::format`] for display rounding.

use klimrod_types::{
    DistributionPolicy, DistributionRow, Pool, SalesRecord, TipReport, DEFAULT_POOL_LABEL,
};

use crate::totals::compute_totals;

/// Distribute gratuity across `records`.
///
/// Without a pool the policy only labels the report. With a pool the report
/// totals carry `pool.amount` exactly as the card gratuity total, not the
/// sum of the rows.
///
/// Negative amounts are not rejected and flow through the arithmetic.
pub fn distribute(
    records: &[SalesRecord],
    policy: DistributionPolicy,
    pool: Option<&Pool>,
) -> TipReport {
    match pool {
        None => pass_through(records, policy),
        Some(pool) => split_pool(records, policy, pool),
    }
}

fn pass_through(records: &[SalesRecord], policy: DistributionPolicy) -> TipReport {
    let totals = compute_totals(records);

    let rows = records
        .iter()
        .filter_map(|r| {
            let tips = r.gratuity();
            if tips <= 0.0 {
                return None;
            }
            let percentage_of_pool = if totals.total_gratuity > 0.0 {
                tips / totals.total_gratuity * 100.0
            } else {
                0.0
            };
            Some(DistributionRow {
                employee: r.employee.clone(),
                position: r.position.clone(),
                cc_gratuity: r.cc_gratuity,
                cash_gratuity: r.cash_gratuity,
                tips,
                points: r.points,
                percentage_of_pool,
            })
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        %policy,
        records = records.len(),
        rows = rows.len(),
        total_gratuity = totals.total_gratuity,
        "gratuity passed through"
    );

    TipReport {
        policy,
        pool_label: DEFAULT_POOL_LABEL.to_string(),
        pooled: false,
        rows,
        totals,
    }
}

/// Fraction of the pool owed to `record`.
fn share(record: &SalesRecord, policy: DistributionPolicy, total_points: f64, count: usize) -> f64 {
    match policy {
        DistributionPolicy::Percentage => {
            if total_points > 0.0 {
                record.points / total_points
            } else {
                0.0
            }
        }
        DistributionPolicy::Equal => 1.0 / count as f64,
    }
}

fn split_pool(records: &[SalesRecord], policy: DistributionPolicy, pool: &Pool) -> TipReport {
    let mut totals = compute_totals(records);
    let total_points = totals.total_points;

    let rows = records
        .iter()
        .filter_map(|r| {
            let share = share(r, policy, total_points, records.len());
            let amount = pool.amount * share;
            if amount <= 0.0 {
                return None;
            }
            Some(DistributionRow {
                employee: r.employee.clone(),
                position: r.position.clone(),
                cc_gratuity: amount,
                cash_gratuity: 0.0,
                tips: amount,
                points: r.points,
                percentage_of_pool: share * 100.0,
            })
        })
        .collect::<Vec<_>>();

    totals.total_cc_gratuity = pool.amount;
    totals.total_cash_gratuity = 0.0;
    totals.total_gratuity = pool.amount;

    if rows.is_empty() && pool.amount > 0.0 {
        tracing::warn!(
            %policy,
            pool = pool.amount,
            label = pool.label(),
            records = records.len(),
            total_points,
            "pool left undistributed: no employee has a positive share"
        );
    } else {
        tracing::debug!(
            %policy,
            pool = pool.amount,
            label = pool.label(),
            rows = rows.len(),
            total_points,
            "pool distributed"
        );
    }

    TipReport {
        policy,
        pool_label: pool.label().to_string(),
        pooled: true,
        rows,
        totals,
    }
}
