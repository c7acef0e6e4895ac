//! Per-employee sales records and their aggregate totals.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError, DisplayFromStr, PickFirst};

use crate::Amount;

/// A sales record as it arrives from storage or a form.
///
/// Numeric fields are lenient: a missing key, `null`, a non-numeric value, or
/// a non-finite number all become `None`. Numeric strings such as `"12.50"`
/// are accepted. Older rows used snake_case or PascalCase keys, so each field
/// also answers to those spellings.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSalesRecord {
    #[serde(default, alias = "Employee", alias = "EMPLOYEE")]
    pub employee: String,
    #[serde(default, alias = "Position", alias = "POSITION")]
    pub position: String,
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default, alias = "net_sales", alias = "NetSales", alias = "netsales")]
    pub net_sales: Option<Amount>,
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default, alias = "cash_sales", alias = "CashSales", alias = "cashsales")]
    pub cash_sales: Option<Amount>,
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(
        default,
        alias = "cc_sales",
        alias = "CcSales",
        alias = "CCSales",
        alias = "ccsales"
    )]
    pub cc_sales: Option<Amount>,
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(
        default,
        alias = "cc_gratuity",
        alias = "CcGratuity",
        alias = "CCGratuity",
        alias = "ccgratuity"
    )]
    pub cc_gratuity: Option<Amount>,
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(
        default,
        alias = "cash_gratuity",
        alias = "CashGratuity",
        alias = "cashgratuity"
    )]
    pub cash_gratuity: Option<Amount>,
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default, alias = "Points", alias = "POINTS")]
    pub points: Option<f64>,
}

/// One employee's performance for an event, with every numeric field resolved.
///
/// Negative values are kept as-is; validation belongs to the form layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    pub employee: String,
    /// Informational only.
    pub position: String,
    pub net_sales: Amount,
    pub cash_sales: Amount,
    pub cc_sales: Amount,
    pub cc_gratuity: Amount,
    pub cash_gratuity: Amount,
    /// Weight used for proportional distribution.
    pub points: f64,
}

impl SalesRecord {
    /// Card plus cash gratuity attributed to this employee.
    pub fn gratuity(&self) -> Amount {
        self.cc_gratuity + self.cash_gratuity
    }
}

/// Missing and non-finite values count as zero.
fn coerce(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

impl From<RawSalesRecord> for SalesRecord {
    fn from(raw: RawSalesRecord) -> Self {
        Self {
            employee: raw.employee,
            position: raw.position,
            net_sales: coerce(raw.net_sales),
            cash_sales: coerce(raw.cash_sales),
            cc_sales: coerce(raw.cc_sales),
            cc_gratuity: coerce(raw.cc_gratuity),
            cash_gratuity: coerce(raw.cash_gratuity),
            points: coerce(raw.points),
        }
    }
}

/// Aggregate of a list of [`SalesRecord`]s.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_net_sales: Amount,
    pub total_cash_sales: Amount,
    pub total_cc_sales: Amount,
    pub total_cc_gratuity: Amount,
    pub total_cash_gratuity: Amount,
    pub total_points: f64,
    /// `total_cc_gratuity + total_cash_gratuity`.
    pub total_gratuity: Amount,
}
