//! Public contact form: field checks, honeypot and per-email submission limit.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::ValidateEmail;

use crate::models::{ContactSubmission, NewContactSubmission, ServicePrice};

#[derive(Debug, thiserror::Error)]
pub enum ContactFormError {
    #[error("All required fields must be filled")]
    MissingFields,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Bot detected")]
    BotDetected,
}

/// Body posted by the public site.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub reason: Option<String>,
    pub preferred_contact: Option<String>,
    pub message: Option<String>,
    pub selected_service: Option<String>,
    pub service_price: Option<ServicePrice>,
    /// Honeypots: hidden inputs a person leaves empty.
    #[serde(rename = "bot_field")]
    pub bot_field: Option<Value>,
    pub confirmation: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ContactReceipt {
    pub message: &'static str,
    pub submission: ContactSubmission,
}

impl ContactReceipt {
    pub fn new(submission: ContactSubmission) -> Self {
        Self {
            message: "Contact form submitted successfully",
            submission,
        }
    }
}

fn filled(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Anything a browser would treat as a non-empty input value.
fn truthy(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn trimmed(field: Option<String>) -> Option<String> {
    field.map(|v| v.trim().to_string())
}

impl ContactForm {
    /// Required fields and email shape. Returns the normalized email, which is
    /// also the rate-limit key.
    pub fn validate(&self) -> Result<String, ContactFormError> {
        let required = [
            &self.name,
            &self.email,
            &self.reason,
            &self.preferred_contact,
            &self.message,
        ];
        if !required.into_iter().all(filled) {
            return Err(ContactFormError::MissingFields);
        }

        let email = self
            .email
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        let dotted_domain = email
            .rsplit_once('@')
            .is_some_and(|(_, domain)| domain.contains('.'));
        if !email.validate_email() || !dotted_domain {
            return Err(ContactFormError::InvalidEmail);
        }
        Ok(email)
    }

    pub fn reject_bots(&self) -> Result<(), ContactFormError> {
        if truthy(&self.bot_field) || truthy(&self.confirmation) {
            return Err(ContactFormError::BotDetected);
        }
        Ok(())
    }

    /// Submission as stored: text trimmed, email lowercased, blank phone dropped.
    pub fn into_new_submission(self) -> NewContactSubmission {
        NewContactSubmission {
            name: trimmed(self.name),
            email: trimmed(self.email).map(|e| e.to_lowercase()),
            phone: trimmed(self.phone).filter(|p| !p.is_empty()),
            reason: self.reason,
            preferred_contact: self.preferred_contact,
            message: trimmed(self.message),
            selected_service: self.selected_service,
            service_price: self.service_price,
            extra: Map::new(),
        }
    }
}

struct Window {
    count: u32,
    last_submission: DateTime<Utc>,
}

/// Counts submissions per key. A key's count starts over once an hour has
/// passed since its last accepted submission.
pub struct SubmissionLimiter {
    max_per_hour: u32,
    windows: Mutex<HashMap<String, Window>>,
}

impl SubmissionLimiter {
    pub fn new(max_per_hour: u32) -> Self {
        Self {
            max_per_hour,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Records a submission for `key` and reports whether it is allowed.
    pub fn allow(&self, key: &str, now: DateTime<Utc>) -> anyhow::Result<bool> {
        let mut windows = self
            .windows
            .lock()
            .map_err(|_| anyhow::anyhow!("rate limit lock poisoned"))?;

        match windows.get_mut(key) {
            Some(window) if now - window.last_submission <= Duration::hours(1) => {
                if window.count >= self.max_per_hour {
                    return Ok(false);
                }
                window.count += 1;
                window.last_submission = now;
            }
            _ => {
                windows.insert(
                    key.to_string(),
                    Window {
                        count: 1,
                        last_submission: now,
                    },
                );
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(value: Value) -> ContactForm {
        serde_json::from_value(value).unwrap()
    }

    fn valid() -> Value {
        json!({
            "name": "  Ana Lima ",
            "email": " Ana@Example.com ",
            "phone": "   ",
            "reason": "love",
            "preferredContact": "email",
            "message": " Hello there \n"
        })
    }

    #[test]
    fn test_validate_normalizes_email() {
        assert_eq!(form(valid()).validate().unwrap(), "ana@example.com");
    }

    #[test]
    fn test_missing_required_field() {
        for key in ["name", "email", "reason", "preferredContact", "message"] {
            let mut body = valid();
            body[key] = json!("");
            assert!(matches!(
                form(body).validate(),
                Err(ContactFormError::MissingFields)
            ));
        }
        assert!(matches!(
            ContactForm::default().validate(),
            Err(ContactFormError::MissingFields)
        ));
    }

    #[test]
    fn test_invalid_email() {
        for email in ["not-an-email", "ana@localhost", "ana @example.com"] {
            let mut body = valid();
            body["email"] = json!(email);
            assert!(
                matches!(form(body).validate(), Err(ContactFormError::InvalidEmail)),
                "{email} accepted"
            );
        }
    }

    #[test]
    fn test_honeypots() {
        assert!(form(valid()).reject_bots().is_ok());

        let mut empty_traps = valid();
        empty_traps["bot_field"] = json!("");
        empty_traps["confirmation"] = json!(false);
        assert!(form(empty_traps).reject_bots().is_ok());

        for (key, value) in [("bot_field", json!("x")), ("confirmation", json!(true))] {
            let mut body = valid();
            body[key] = value;
            assert!(matches!(
                form(body).reject_bots(),
                Err(ContactFormError::BotDetected)
            ));
        }
    }

    #[test]
    fn test_into_new_submission_trims() {
        let new = form(valid()).into_new_submission();
        assert_eq!(new.name.as_deref(), Some("Ana Lima"));
        assert_eq!(new.email.as_deref(), Some("ana@example.com"));
        assert_eq!(new.phone, None);
        assert_eq!(new.message.as_deref(), Some("Hello there"));
        assert!(new.extra.is_empty());
    }

    #[test]
    fn test_limiter_allows_three_per_hour() {
        let limiter = SubmissionLimiter::new(3);
        let start = Utc::now();

        for minute in 0..3 {
            assert!(limiter.allow("a@x.com", start + Duration::minutes(minute)).unwrap());
        }
        assert!(!limiter.allow("a@x.com", start + Duration::minutes(10)).unwrap());
        assert!(limiter.allow("b@x.com", start + Duration::minutes(10)).unwrap());

        // Last accepted submission was at minute 2.
        assert!(limiter
            .allow("a@x.com", start + Duration::minutes(63))
            .unwrap());
    }
}
