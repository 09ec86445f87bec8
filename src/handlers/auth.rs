use std::sync::Arc;

use axum::extract::State;
use chrono::Utc;

use crate::envelope::ApiResponse;
use crate::errors::AppError;
use crate::extract::JsonBody;
use crate::models::Session;
use crate::services::auth::{AuthError, Credentials};
use crate::state::AppState;

// POST /api/auth/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    body: Result<JsonBody<Credentials>, AppError>,
) -> Result<ApiResponse<Session>, AppError> {
    // A body that is not a credentials object is just a failed login.
    let credentials = match body {
        Ok(JsonBody(credentials)) => credentials,
        Err(e) => {
            tracing::warn!(error = %e, "login rejected: unreadable body");
            return Err(AuthError::InvalidCredentials.into());
        }
    };

    match state.identity.authenticate(&credentials).await {
        Ok(admin) => {
            tracing::info!(email = %admin.email, "admin logged in");
            Ok(ApiResponse::ok(Session::issue(admin, Utc::now())))
        }
        Err(e) => {
            tracing::warn!(email = %credentials.email, "login rejected");
            Err(e.into())
        }
    }
}
