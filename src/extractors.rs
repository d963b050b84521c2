//! Extractors that report rejections in the application's JSON error format.
//!
//! The extractors built into axum reply to malformed requests with plain
//! text bodies and their own choice of status code. The wrappers here
//! funnel those rejections through [Error] instead, so every client error
//! comes back as a 400 with an `{"error": ...}` body.

use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Query, Request,
        rejection::{JsonRejection, QueryRejection},
    },
    http::request::Parts,
};

use crate::Error;

/// Deserializes a JSON request body like [axum::Json], reporting a body
/// that cannot be parsed as an [Error].
pub struct AppJson<T>(
    /// The deserialized request body.
    pub T,
);

impl<T, S> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(request, state).await?;

        Ok(Self(value))
    }
}

/// Deserializes query parameters like [axum::extract::Query], reporting a
/// query string that cannot be parsed as an [Error].
pub struct AppQuery<T>(
    /// The deserialized query parameters.
    pub T,
);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    Query<T>: FromRequestParts<S, Rejection = QueryRejection>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;

        Ok(Self(value))
    }
}
