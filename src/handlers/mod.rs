pub mod auth;
pub mod bookings;
pub mod clients;
pub mod contact;
pub mod contact_submissions;
pub mod health;

use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::errors::AppError;

/// Per-path fallback for verbs a resource does not support.
pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(method)
}

/// Router-wide fallback. Preflights never reach it; the CORS layer answers them.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("route {}", uri.path()))
}

/// Replaces the empty 408 produced by the timeout layer with a failure envelope.
pub async fn timeout_envelope(res: Response) -> Response {
    if res.status() == StatusCode::REQUEST_TIMEOUT && !res.headers().contains_key(CONTENT_TYPE) {
        tracing::warn!("request timed out");
        return AppError::Timeout.into_response();
    }
    res
}
