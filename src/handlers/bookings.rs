use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde::Deserialize;

use crate::envelope::ApiResponse;
use crate::errors::AppError;
use crate::extract::{IdQuery, JsonBody, Path, Query};
use crate::models::{Booking, BookingUpdate, NewBooking};
use crate::services::stats::BookingStats;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct BookingsQuery {
    pub status: Option<String>,
    /// Present (with any value) to request the aggregate view.
    pub stats: Option<String>,
}

impl BookingsQuery {
    pub fn wants_stats(&self) -> bool {
        self.stats.is_some()
    }
}

// GET /api/bookings[?status=..][&stats]
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BookingsQuery>,
) -> Result<Response, AppError> {
    let mut bookings = state.bookings.list()?;

    if query.wants_stats() {
        return Ok(ApiResponse::ok(BookingStats::from_bookings(&bookings)).into_response());
    }

    if let Some(status) = query.status.as_deref() {
        bookings.retain(|b| b.status.as_str() == status);
    }

    Ok(ApiResponse::ok(bookings).into_response())
}

// GET /api/bookings/stats
pub async fn stats(State(state): State<Arc<AppState>>) -> Result<ApiResponse<BookingStats>, AppError> {
    let bookings = state.bookings.list()?;
    Ok(ApiResponse::ok(BookingStats::from_bookings(&bookings)))
}

// GET /api/bookings/:id
pub async fn get_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Booking>, AppError> {
    state
        .bookings
        .get(&id)?
        .map(ApiResponse::ok)
        .ok_or_else(|| AppError::NotFound(format!("booking {id}")))
}

// POST /api/bookings
pub async fn create(
    State(state): State<Arc<AppState>>,
    JsonBody(new): JsonBody<NewBooking>,
) -> Result<ApiResponse<Booking>, AppError> {
    let booking = state.bookings.append(Booking::from_new(new, Utc::now()))?;
    tracing::info!(id = %booking.id, service = ?booking.service, "booking created");
    Ok(ApiResponse::created(booking))
}

// PUT /api/bookings/:id
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(changes): JsonBody<BookingUpdate>,
) -> Result<ApiResponse<Booking>, AppError> {
    apply_update(&state, &id, changes)
}

// PUT /api/bookings?id=
pub async fn update_by_query(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IdQuery>,
    JsonBody(changes): JsonBody<BookingUpdate>,
) -> Result<ApiResponse<Booking>, AppError> {
    apply_update(&state, &query.require()?, changes)
}

// DELETE /api/bookings/:id
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, AppError> {
    remove_booking(&state, &id)
}

// DELETE /api/bookings?id=
pub async fn remove_by_query(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IdQuery>,
) -> Result<ApiResponse<()>, AppError> {
    remove_booking(&state, &query.require()?)
}

fn apply_update(
    state: &AppState,
    id: &str,
    changes: BookingUpdate,
) -> Result<ApiResponse<Booking>, AppError> {
    let booking = state
        .bookings
        .update(id, Box::new(move |b: &mut Booking| changes.apply(b)))?
        .ok_or_else(|| AppError::NotFound(format!("booking {id}")))?;

    tracing::info!(
        id = %booking.id,
        status = booking.status.as_str(),
        "booking updated"
    );
    Ok(ApiResponse::ok(booking))
}

fn remove_booking(state: &AppState, id: &str) -> Result<ApiResponse<()>, AppError> {
    if !state.bookings.remove(id)? {
        return Err(AppError::NotFound(format!("booking {id}")));
    }
    tracing::info!(id, "booking deleted");
    Ok(ApiResponse::message("Booking deleted successfully"))
}
