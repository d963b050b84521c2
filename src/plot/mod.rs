//! Plot module
//!
//! Provides a page charting the daily income and expense totals within a
//! date range.

mod aggregation;
mod charts;
mod handlers;

pub use handlers::get_plot_page;
