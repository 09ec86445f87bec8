use std::sync::Arc;

use axum::extract::State;
use chrono::Utc;

use crate::envelope::ApiResponse;
use crate::errors::AppError;
use crate::extract::JsonBody;
use crate::models::ContactSubmission;
use crate::services::contact_form::{ContactForm, ContactReceipt};
use crate::state::AppState;

// POST /api/contact
pub async fn submit(
    State(state): State<Arc<AppState>>,
    JsonBody(form): JsonBody<ContactForm>,
) -> Result<ApiResponse<ContactReceipt>, AppError> {
    let now = Utc::now();
    let email = form.validate()?;

    if !state.contact_limiter.allow(&email, now)? {
        tracing::warn!(email = %email, "contact form rate limit exceeded");
        return Err(AppError::RateLimited(
            "Too many submissions. Please try again later.".to_string(),
        ));
    }

    if let Err(e) = form.reject_bots() {
        tracing::warn!(email = %email, "contact form honeypot filled");
        return Err(e.into());
    }

    let submission = state
        .submissions
        .append(ContactSubmission::from_new(form.into_new_submission(), now))?;
    tracing::info!(
        id = %submission.id,
        reason = ?submission.reason,
        "contact form submitted"
    );
    Ok(ApiResponse::ok(ContactReceipt::new(submission)))
}
