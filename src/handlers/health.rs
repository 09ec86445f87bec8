use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::envelope::ApiResponse;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

// GET /api/health
pub async fn health() -> ApiResponse<Health> {
    ApiResponse::ok(Health {
        status: "OK",
        timestamp: Utc::now(),
    })
}
