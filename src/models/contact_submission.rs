use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{merge_extra, strip_reserved};
use crate::store::Record;

const RESERVED: &[&str] = &["id", "status", "createdAt"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub reason: Option<String>,
    pub preferred_contact: Option<String>,
    pub message: Option<String>,
    pub selected_service: Option<String>,
    #[serde(default)]
    pub service_price: Option<ServicePrice>,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The contact form posts the price as a string, older clients as a number
/// (integer or decimal). Whichever arrives is echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServicePrice {
    Amount(serde_json::Number),
    Text(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    New,
    Contacted,
    Closed,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::New => "new",
            SubmissionStatus::Contacted => "contacted",
            SubmissionStatus::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub reason: Option<String>,
    pub preferred_contact: Option<String>,
    pub message: Option<String>,
    pub selected_service: Option<String>,
    pub service_price: Option<ServicePrice>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSubmissionUpdate {
    pub status: Option<SubmissionStatus>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub reason: Option<String>,
    pub preferred_contact: Option<String>,
    pub message: Option<String>,
    pub selected_service: Option<String>,
    pub service_price: Option<ServicePrice>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContactSubmission {
    pub fn from_new(mut new: NewContactSubmission, now: DateTime<Utc>) -> Self {
        strip_reserved(&mut new.extra, RESERVED);
        Self {
            id: String::new(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            reason: new.reason,
            preferred_contact: new.preferred_contact,
            message: new.message,
            selected_service: new.selected_service,
            service_price: new.service_price,
            status: SubmissionStatus::New,
            created_at: now,
            extra: new.extra,
        }
    }
}

impl ContactSubmissionUpdate {
    pub fn apply(self, submission: &mut ContactSubmission) {
        if let Some(v) = self.status {
            submission.status = v;
        }
        if let Some(v) = self.name {
            submission.name = Some(v);
        }
        if let Some(v) = self.email {
            submission.email = Some(v);
        }
        if let Some(v) = self.phone {
            submission.phone = Some(v);
        }
        if let Some(v) = self.reason {
            submission.reason = Some(v);
        }
        if let Some(v) = self.preferred_contact {
            submission.preferred_contact = Some(v);
        }
        if let Some(v) = self.message {
            submission.message = Some(v);
        }
        if let Some(v) = self.selected_service {
            submission.selected_service = Some(v);
        }
        if let Some(v) = self.service_price {
            submission.service_price = Some(v);
        }
        merge_extra(&mut submission.extra, self.extra, RESERVED);
    }
}

impl Record for ContactSubmission {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}
