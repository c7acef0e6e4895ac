//! Expense totals for an event.

use klimrod_types::{ExpenseRow, ExpenseTotals, Payer, PaymentMethod};

/// Sum expense amounts overall and per payment method, payer, and refund
/// status. Rows with an unspecified method or payer count only toward
/// `total_expenses` (and `total_refunded` when refunded).
pub fn compute_expense_totals(expenses: &[ExpenseRow]) -> ExpenseTotals {
    expenses
        .iter()
        .fold(ExpenseTotals::default(), |mut acc, e| {
            acc.total_expenses += e.amount;
            match e.payment_method {
                PaymentMethod::Check => acc.total_check += e.amount,
                PaymentMethod::Cash => acc.total_cash += e.amount,
                PaymentMethod::Unspecified => {}
            }
            match e.paid_by {
                Payer::Business => acc.total_business += e.amount,
                Payer::Employee => acc.total_employee += e.amount,
                Payer::Unspecified => {}
            }
            if e.refunded {
                acc.total_refunded += e.amount;
            }
            acc
        })
}
