//! Defines the endpoint for listing the transactions within a date range.

use axum::{Json, extract::State};
use serde::Deserialize;

use crate::{
    AppState, Error, date::parse_date, extractors::AppQuery, stores::TransactionQuery,
    transaction::Transaction,
};

/// The query parameters selecting the transactions to list or plot.
///
/// Both fields are deserialized as optional so that an absent parameter
/// surfaces as an [Error::MissingField] naming the parameter.
#[derive(Debug, Deserialize)]
pub struct DateRangeParams {
    /// The first date to include, as DD-MM-YYYY.
    pub start_date: Option<String>,
    /// The last date to include, as DD-MM-YYYY.
    pub end_date: Option<String>,
}

impl DateRangeParams {
    /// Convert the raw parameters into a store query over the inclusive
    /// date range.
    ///
    /// # Errors
    /// This function will return an [Error::MissingField] if either
    /// parameter is absent, or an [Error::InvalidDate] if one does not parse.
    pub(crate) fn into_query(self) -> Result<TransactionQuery, Error> {
        let start_text = self.start_date.ok_or(Error::MissingField("start_date"))?;
        let end_text = self.end_date.ok_or(Error::MissingField("end_date"))?;

        let start_date = parse_date("start_date", &start_text)?;
        let end_date = parse_date("end_date", &end_text)?;

        Ok(TransactionQuery {
            date_range: Some(start_date..=end_date),
        })
    }
}

/// A route handler for listing the transactions within an inclusive date
/// range, in the order they were appended.
///
/// Both `start_date` and `end_date` are required. A start date after the end
/// date is allowed and matches nothing.
pub async fn get_transactions_endpoint(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<DateRangeParams>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let query = params.into_query()?;
    let transactions = state.lock_store()?.query(query)?;

    Ok(Json(transactions))
}
