//! The endpoints for the application.
//!
//! Keeping the URIs in one place avoids handlers and tests drifting apart.

/// The root of the application, returns a plain text greeting.
pub const ROOT: &str = "/";

/// Accepts a JSON transaction and appends it to the store.
pub const ADD: &str = "/add";

/// Lists the transactions within a date range as JSON.
pub const TRANSACTIONS: &str = "/transactions";

/// An HTML page charting income and expenses over time.
pub const PLOT: &str = "/plot";

/// Responds with 418 I'm a teapot.
pub const COFFEE: &str = "/coffee";
