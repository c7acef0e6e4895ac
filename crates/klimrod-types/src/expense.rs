//! Event expense structures.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Amount, ParseVariantError};

/// How an expense was paid. Empty on the form means unspecified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub enum PaymentMethod {
    #[serde(rename = "CHECK")]
    Check,
    #[serde(rename = "CASH")]
    Cash,
    #[default]
    #[serde(rename = "")]
    Unspecified,
}

impl FromStr for PaymentMethod {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CHECK" => Ok(Self::Check),
            "CASH" => Ok(Self::Cash),
            "" => Ok(Self::Unspecified),
            _ => Err(ParseVariantError::new("payment method", s)),
        }
    }
}

/// Who fronted the money for an expense.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub enum Payer {
    #[serde(rename = "BUSINESS")]
    Business,
    #[serde(rename = "EMPLOYEE")]
    Employee,
    #[default]
    #[serde(rename = "")]
    Unspecified,
}

impl FromStr for Payer {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUSINESS" => Ok(Self::Business),
            "EMPLOYEE" => Ok(Self::Employee),
            "" => Ok(Self::Unspecified),
            _ => Err(ParseVariantError::new("payer", s)),
        }
    }
}

/// A single expense recorded against an event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRow {
    #[serde(default)]
    pub expense_name: String,
    #[serde(default)]
    pub amount: Amount,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub paid_by: Payer,
    /// Set when `paid_by` is [`Payer::Employee`].
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub refunded: bool,
}

/// Expense aggregates for an event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseTotals {
    pub total_expenses: Amount,
    pub total_check: Amount,
    pub total_cash: Amount,
    pub total_business: Amount,
    pub total_employee: Amount,
    pub total_refunded: Amount,
}
