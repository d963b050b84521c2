//! Transaction data aggregation for the plot page.

use std::collections::HashMap;

use time::Date;

use crate::{
    date::format_date,
    transaction::{Category, Transaction},
};

/// Per-day income and expense totals, aligned with their axis labels.
pub(super) struct DailyTotals {
    /// Each day that has at least one transaction, formatted DD-MM-YYYY, in
    /// chronological order.
    pub labels: Vec<String>,
    /// The income total for each day in `labels`.
    pub income: Vec<f64>,
    /// The expense total for each day in `labels`.
    pub expense: Vec<f64>,
}

/// Sums income and expenses per day over `transactions`.
///
/// Every day with a transaction gets an entry in both series. A day with only
/// income still gets a zero expense entry (and the other way around) so the
/// two lines stay aligned with the axis labels.
pub(super) fn aggregate_by_day(transactions: &[Transaction]) -> DailyTotals {
    let mut income_totals: HashMap<Date, f64> = HashMap::new();
    let mut expense_totals: HashMap<Date, f64> = HashMap::new();

    for transaction in transactions {
        match transaction.category {
            Category::Income => {
                *income_totals.entry(transaction.date).or_insert(0.0) += transaction.amount;
            }
            Category::Expense => {
                *expense_totals.entry(transaction.date).or_insert(0.0) += transaction.amount;
            }
            Category::Other(_) => {}
        }
    }

    let mut days: Vec<Date> = transactions
        .iter()
        .map(|transaction| transaction.date)
        .collect();
    days.sort();
    days.dedup();

    DailyTotals {
        labels: days.iter().map(|day| format_date(*day)).collect(),
        income: days
            .iter()
            .map(|day| income_totals.get(day).copied().unwrap_or(0.0))
            .collect(),
        expense: days
            .iter()
            .map(|day| expense_totals.get(day).copied().unwrap_or(0.0))
            .collect(),
    }
}
