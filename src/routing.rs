//! Assembles the application's routes into a router.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;

use crate::{
    AppState, endpoints,
    plot::get_plot_page,
    transaction::{create_transaction_endpoint, get_transactions_endpoint},
};

/// Creates the router for the application with all routes and the shared
/// application state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index))
        .route(endpoints::ADD, post(create_transaction_endpoint))
        .route(endpoints::TRANSACTIONS, get(get_transactions_endpoint))
        .route(endpoints::PLOT, get(get_plot_page))
        .route(endpoints::COFFEE, get(get_coffee))
        .fallback(get_unknown_route)
        .with_state(state)
}

/// The root path '/' greets the caller, which doubles as a quick way to check
/// the server is up.
async fn get_index() -> Html<&'static str> {
    Html("Hello, this is your finance manager app!")
}

/// Attempt to get a cup of coffee from the server.
async fn get_coffee() -> Response {
    (StatusCode::IM_A_TEAPOT, Html("I'm a teapot")).into_response()
}

async fn get_unknown_route() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "no such route" })),
    )
        .into_response()
}
