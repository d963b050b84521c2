//! Transaction management for the application.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and its `Category` label
//! - The endpoints for appending transactions and listing them by date range

mod core;
mod create_transaction_endpoint;
mod get_transactions_endpoint;

pub use core::{Category, Transaction};
pub use create_transaction_endpoint::create_transaction_endpoint;
pub use get_transactions_endpoint::{DateRangeParams, get_transactions_endpoint};
