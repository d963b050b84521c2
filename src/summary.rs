//! Totals income and expenses over a set of transactions.

use serde::Serialize;

use crate::transaction::{Category, Transaction};

/// The income, expense and net totals over a set of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// The sum of all amounts categorised as income.
    pub total_income: f64,
    /// The sum of all amounts categorised as expenses.
    pub total_expense: f64,
    /// Total income minus total expenses.
    pub net_balance: f64,
}

/// Sums the income, expenses and net balance over `transactions`.
///
/// Transactions with a category other than income or expense are left out of
/// every total, so a summary over only such transactions is all zeros.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut total_income = 0.0;
    let mut total_expense = 0.0;

    for transaction in transactions {
        match transaction.category {
            Category::Income => total_income += transaction.amount,
            Category::Expense => total_expense += transaction.amount,
            Category::Other(_) => {}
        }
    }

    Summary {
        total_income,
        total_expense,
        net_balance: total_income - total_expense,
    }
}
