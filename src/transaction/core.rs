//! Defines the core data models for transactions.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::Date;

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// When the transaction happened.
    #[serde(with = "crate::date::serde_format")]
    pub date: Date,
    /// The amount of money spent or earned in this transaction.
    ///
    /// The sign carries no meaning on its own, the direction of the money is
    /// given by `category`.
    pub amount: f64,
    /// Whether the transaction was money earned, money spent, or some other
    /// label supplied by the user.
    pub category: Category,
    /// A text description of what the transaction was for.
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Create a new transaction with an empty description.
    pub fn new(date: Date, amount: f64, category: Category) -> Self {
        Self {
            date,
            amount,
            category,
            description: String::new(),
        }
    }

    /// Set the description for the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }
}

/// The direction of a transaction.
///
/// Income and expenses are the two labels the application understands.
/// Anything else is carried through verbatim as [Category::Other] so that a
/// file written by another tool survives a round trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
    /// A label other than "Income" or "Expense", stored as given.
    Other(String),
}

impl Category {
    /// Whether the category is one of the two labels used by summaries.
    ///
    /// Totals only count [Category::Income] and [Category::Expense], so
    /// transactions with an unrecognised category are stored but never summed.
    pub fn is_recognised(&self) -> bool {
        matches!(self, Category::Income | Category::Expense)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Income => write!(f, "Income"),
            Category::Expense => write!(f, "Expense"),
            Category::Other(label) => write!(f, "{label}"),
        }
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        match label {
            "Income" => Category::Income,
            "Expense" => Category::Expense,
            _ => Category::Other(label.to_owned()),
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Income" => Category::Income,
            "Expense" => Category::Expense,
            _ => Category::Other(label),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.to_string()
    }
}
