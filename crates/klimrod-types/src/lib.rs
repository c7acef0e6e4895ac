//! # klimrod-types
//!
//! Shared domain types used across the Klimrod workspace: sales records,
//! gratuity distributions, expenses, closed events, recipes, and timecards.
//!
//! Field names serialize in camelCase to match the back-office web client.

pub mod distribution;
pub mod event;
pub mod expense;
pub mod labor;
pub mod period;
pub mod recipe;
pub mod sales;

pub use distribution::{DistributionPolicy, DistributionRow, Pool, TipReport};
pub use event::{ClosedEvent, DayOfWeek, EventInfo, EventSheet, FeeRecipient, OtherFee, Shift};
pub use expense::{ExpenseRow, ExpenseTotals, Payer, PaymentMethod};
pub use labor::{Employee, PayrollEntry, PayrollStatus, Timecard};
pub use period::{EmployeeTotal, PeriodFilter, PeriodReport, PeriodTotals};
pub use recipe::{Ingredient, Recipe, RecipeCost, RecipeLine};
pub use sales::{RawSalesRecord, SalesRecord, Totals};

/// Monetary amount in the event currency.
pub type Amount = f64;

/// Label shown for a pool when the caller does not name it.
pub const DEFAULT_POOL_LABEL: &str = "Gratuity";

/// Error returned when a string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseVariantError {
    /// What was being parsed, e.g. `"shift"`.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseVariantError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    #[ignore] // Run manually to generate bindings
    fn export_ts_bindings() {
        use ts_rs::TS;
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../bindings");
        std::fs::create_dir_all(&dir).expect("create bindings dir");
        crate::sales::SalesRecord::export_all_to(&dir).expect("export SalesRecord");
        crate::sales::Totals::export_all_to(&dir).expect("export Totals");
        crate::distribution::TipReport::export_all_to(&dir).expect("export TipReport");
        crate::expense::ExpenseTotals::export_all_to(&dir).expect("export ExpenseTotals");
        crate::event::ClosedEvent::export_all_to(&dir).expect("export ClosedEvent");
        crate::period::PeriodReport::export_all_to(&dir).expect("export PeriodReport");
        crate::recipe::RecipeCost::export_all_to(&dir).expect("export RecipeCost");
        crate::labor::Timecard::export_all_to(&dir).expect("export Timecard");
        crate::labor::PayrollEntry::export_all_to(&dir).expect("export PayrollEntry");
    }

    #[test]
    fn test_parse_variant_error_message() {
        let err = super::ParseVariantError::new("shift", "BREAKFAST");
        assert_eq!(err.to_string(), "unknown shift: \"BREAKFAST\"");
    }
}
