//! Defines the endpoint for creating a new transaction.

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    AppState, Error,
    date::parse_date,
    extractors::AppJson,
    transaction::{Category, Transaction},
};

/// The request body for creating a transaction.
///
/// Every field is optional so that an absent field surfaces as an
/// [Error::MissingField] naming the field, instead of a generic
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// The date when the transaction occurred, as DD-MM-YYYY.
    pub date: Option<String>,
    /// The value of the transaction in dollars, as a JSON number or a
    /// numeric string.
    pub amount: Option<Value>,
    /// "Income", "Expense", or any other label.
    pub category: Option<String>,
    /// Text detailing the transaction.
    pub description: Option<String>,
}

impl CreateTransactionRequest {
    fn into_transaction(self) -> Result<Transaction, Error> {
        let date_text = self.date.ok_or(Error::MissingField("date"))?;
        let date = parse_date("date", &date_text)?;

        let amount = match self.amount {
            Some(value) => parse_amount(&value)?,
            None => return Err(Error::MissingField("amount")),
        };

        let category = self.category.ok_or(Error::MissingField("category"))?;

        Ok(Transaction::new(date, amount, Category::from(category))
            .description(&self.description.unwrap_or_default()))
    }
}

fn parse_amount(value: &Value) -> Result<f64, Error> {
    match value {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| Error::InvalidAmount(number.to_string())),
        Value::String(text) => text.parse().map_err(|_| Error::InvalidAmount(text.clone())),
        other => Err(Error::InvalidAmount(other.to_string())),
    }
}

/// A route handler for appending a new transaction to the store.
///
/// Transactions with a category other than "Income" or "Expense" are stored
/// as given. They are logged because they will never show up in the income
/// or expense totals.
pub async fn create_transaction_endpoint(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateTransactionRequest>,
) -> Result<Json<Value>, Error> {
    let transaction = request.into_transaction()?;

    if !transaction.category.is_recognised() {
        tracing::warn!(
            "storing transaction with unrecognised category \"{}\"",
            transaction.category
        );
    }

    state.lock_store()?.append(transaction)?;

    Ok(Json(json!({ "message": "Entry added successfully" })))
}
