//! Period sales report structures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::event::{ClosedEvent, Shift};
use crate::Amount;

/// Inclusive date range for one restaurant, optionally narrowed to one shift.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PeriodFilter {
    /// `None` means every restaurant in the input.
    #[serde(default)]
    pub restaurant_id: Option<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// `None` means all shifts.
    #[serde(default)]
    pub shift: Option<Shift>,
}

impl PeriodFilter {
    pub fn matches(&self, event: &ClosedEvent) -> bool {
        let date = event.info.date;
        let in_range = date >= self.start && date <= self.end;
        let shift_ok = self.shift.map_or(true, |s| s == event.info.shift);
        let restaurant_ok = self
            .restaurant_id
            .as_deref()
            .map_or(true, |id| id == event.restaurant_id);
        in_range && shift_ok && restaurant_ok
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotals {
    pub cc_gratuity: Amount,
    pub cash_gratuity: Amount,
    pub total_gratuity: Amount,
    pub net_sales: Amount,
}

/// One employee's gratuity across every event in a period.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeTotal {
    pub employee: String,
    pub cc_gratuity: Amount,
    pub cash_gratuity: Amount,
    pub total: Amount,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PeriodReport {
    pub filter: PeriodFilter,
    /// Matching events, oldest first.
    pub events: Vec<ClosedEvent>,
    pub totals: PeriodTotals,
    /// Highest total first.
    pub employee_totals: Vec<EmployeeTotal>,
}
