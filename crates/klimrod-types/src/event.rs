//! Service events: the working sheet a manager fills in and the closed
//! snapshot kept for reporting.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Deserializer, Serialize};

use crate::distribution::{DistributionPolicy, DistributionRow, Pool, TipReport};
use crate::expense::{ExpenseRow, ExpenseTotals};
use crate::sales::{RawSalesRecord, SalesRecord, Totals};
use crate::{Amount, ParseVariantError, DEFAULT_POOL_LABEL};

/// Service period of an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum Shift {
    Lunch,
    Brunch,
    Dinner,
    Night,
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lunch => "LUNCH",
            Self::Brunch => "BRUNCH",
            Self::Dinner => "DINNER",
            Self::Night => "NIGHT",
        };
        f.write_str(name)
    }
}

impl FromStr for Shift {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LUNCH" => Ok(Self::Lunch),
            "BRUNCH" => Ok(Self::Brunch),
            "DINNER" => Ok(Self::Dinner),
            "NIGHT" => Ok(Self::Night),
            _ => Err(ParseVariantError::new("shift", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }
}

/// Header of an event sheet.
///
/// `day` always follows `date`; a stored day of week is ignored on load.
#[derive(Clone, Debug, PartialEq, Serialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EventInfo {
    pub date: NaiveDate,
    pub day: DayOfWeek,
    /// "EVENT 1", "EVENT 2", ...
    pub event_name: String,
    pub shift: Shift,
    pub manager: String,
    #[serde(default)]
    pub notes: String,
}

impl EventInfo {
    /// Build an event header; the day of week is taken from `date`.
    pub fn new(
        date: NaiveDate,
        event_name: impl Into<String>,
        shift: Shift,
        manager: impl Into<String>,
    ) -> Self {
        Self {
            date,
            day: date.weekday().into(),
            event_name: event_name.into(),
            shift,
            manager: manager.into(),
            notes: String::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEventInfo {
    date: NaiveDate,
    event_name: String,
    shift: Shift,
    manager: String,
    #[serde(default)]
    notes: String,
}

impl<'de> Deserialize<'de> for EventInfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let stored = StoredEventInfo::deserialize(deserializer)?;
        Ok(Self {
            notes: stored.notes,
            ..Self::new(stored.date, stored.event_name, stored.shift, stored.manager)
        })
    }
}

/// Someone who receives part of an event's other fee.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct FeeRecipient {
    #[serde(default)]
    pub employee: String,
    #[serde(default)]
    pub position: String,
}

/// A flat fee (e.g. a service charge) split equally among its recipients.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct OtherFee {
    #[serde(default)]
    pub amount: Amount,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub recipients: Vec<FeeRecipient>,
}

/// An open event as entered by a manager, before closing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSheet {
    pub info: EventInfo,
    #[serde(default, alias = "salesData")]
    pub sales: Vec<RawSalesRecord>,
    #[serde(default, alias = "expenseData")]
    pub expenses: Vec<ExpenseRow>,
    #[serde(default)]
    pub other_fee: Option<OtherFee>,
    /// `None` defers to the caller's default policy.
    #[serde(default)]
    pub distribution_policy: Option<DistributionPolicy>,
    /// Overrides per-employee gratuity with a single pool when set.
    #[serde(default)]
    pub gratuity_pool: Option<Pool>,
}

/// Immutable snapshot of a closed event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ClosedEvent {
    pub restaurant_id: String,
    pub closed_at: DateTime<Utc>,
    pub info: EventInfo,
    pub sales: Vec<SalesRecord>,
    pub expenses: Vec<ExpenseRow>,
    pub totals: Totals,
    pub expense_totals: ExpenseTotals,
    pub distribution_policy: DistributionPolicy,
    /// The pool the gratuity was split from; `None` for pass-through.
    #[serde(default)]
    pub gratuity_pool: Option<Pool>,
    pub tip_distribution: Vec<DistributionRow>,
    pub other_fee_distribution: Option<TipReport>,
    /// Cash sales minus cash-paid expenses.
    pub cash_on_hand: Amount,
}

impl ClosedEvent {
    /// The event's gratuity distribution as a report.
    pub fn tip_report(&self) -> TipReport {
        TipReport {
            policy: self.distribution_policy,
            pool_label: self
                .gratuity_pool
                .as_ref()
                .map_or(DEFAULT_POOL_LABEL, Pool::label)
                .to_string(),
            pooled: self.gratuity_pool.is_some(),
            rows: self.tip_distribution.clone(),
            totals: self.totals.clone(),
        }
    }
}
