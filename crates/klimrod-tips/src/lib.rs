//! # klimrod-tips
//!
//! Gratuity distribution and sales accounting for restaurant events, plus
//! the kitchen and labor arithmetic around them.
//!
//! Everything here is a pure function over borrowed input: no storage, no
//! clocks, no shared state. Callers load records, pass them in, and render
//! whatever comes back.
//!
//! ## Modules
//!
//! - [`totals`] — Sales totals aggregation
//! - [`distribution`] — Pooled and pass-through gratuity distribution
//! - [`expenses`] — Expense totals
//! - [`closing`] — Closing an event sheet, other-fee split
//! - [`period`] — Period sales report
//! - [`costing`] — Recipe cost and margins
//! - [`payroll`] — Timecard hours and monthly payroll
//! - [`format`] — Currency and percentage display

pub mod closing;
pub mod costing;
pub mod distribution;
pub mod expenses;
pub mod format;
pub mod payroll;
pub mod period;
pub mod totals;

pub use closing::{amount_per_recipient, close_event, split_other_fee};
pub use costing::cost_recipe;
pub use distribution::distribute;
pub use expenses::compute_expense_totals;
pub use payroll::generate_payroll;
pub use period::period_report;
pub use totals::compute_totals;

/// Error types for tip and report operations.
///
/// The distribution engine itself never fails; these cover the inputs
/// around it.
#[derive(Debug, thiserror::Error)]
pub enum TipError {
    /// A policy, shift, or payment field held an unknown value.
    #[error(transparent)]
    UnknownVariant(#[from] klimrod_types::ParseVariantError),

    /// Period start falls after its end.
    #[error("invalid period: start {start} is after end {end}")]
    InvalidPeriod {
        /// First day of the period.
        start: chrono::NaiveDate,
        /// Last day of the period.
        end: chrono::NaiveDate,
    },

    /// An event cannot be closed without a restaurant.
    #[error("restaurant id is empty")]
    MissingRestaurant,

    /// A pay or tax rate outside its valid range.
    #[error("invalid {what}: {value}")]
    InvalidRate {
        /// Which rate, e.g. `"hourly rate"`.
        what: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Convenience result type for tip operations.
pub type Result<T> = std::result::Result<T, TipError>;
