use std::sync::Arc;

use axum::extract::State;
use chrono::Utc;

use crate::envelope::ApiResponse;
use crate::errors::AppError;
use crate::extract::{IdQuery, JsonBody, Path, Query};
use crate::models::{ContactSubmission, ContactSubmissionUpdate, NewContactSubmission};
use crate::state::AppState;

// GET /api/contact-submissions
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<Vec<ContactSubmission>>, AppError> {
    Ok(ApiResponse::ok(state.submissions.list()?))
}

// GET /api/contact-submissions/:id
pub async fn get_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<ContactSubmission>, AppError> {
    state
        .submissions
        .get(&id)?
        .map(ApiResponse::ok)
        .ok_or_else(|| AppError::NotFound(format!("contact submission {id}")))
}

// POST /api/contact-submissions
pub async fn create(
    State(state): State<Arc<AppState>>,
    JsonBody(new): JsonBody<NewContactSubmission>,
) -> Result<ApiResponse<ContactSubmission>, AppError> {
    let submission = state
        .submissions
        .append(ContactSubmission::from_new(new, Utc::now()))?;
    tracing::info!(
        id = %submission.id,
        reason = ?submission.reason,
        "contact submission received"
    );
    Ok(ApiResponse::created(submission))
}

// PUT /api/contact-submissions/:id
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(changes): JsonBody<ContactSubmissionUpdate>,
) -> Result<ApiResponse<ContactSubmission>, AppError> {
    apply_update(&state, &id, changes)
}

// PUT /api/contact-submissions?id=
pub async fn update_by_query(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IdQuery>,
    JsonBody(changes): JsonBody<ContactSubmissionUpdate>,
) -> Result<ApiResponse<ContactSubmission>, AppError> {
    apply_update(&state, &query.require()?, changes)
}

fn apply_update(
    state: &AppState,
    id: &str,
    changes: ContactSubmissionUpdate,
) -> Result<ApiResponse<ContactSubmission>, AppError> {
    let submission = state
        .submissions
        .update(id, Box::new(move |s: &mut ContactSubmission| changes.apply(s)))?
        .ok_or_else(|| AppError::NotFound(format!("contact submission {id}")))?;
    tracing::info!(
        id = %submission.id,
        status = submission.status.as_str(),
        "contact submission updated"
    );
    Ok(ApiResponse::ok(submission))
}
