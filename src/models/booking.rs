use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{merge_extra, null_as_default, strip_reserved};
use crate::store::Record;

/// Keys the server owns; callers cannot set them through `extra`.
const RESERVED: &[&str] = &["id", "status", "paymentStatus", "createdAt"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub service: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    /// Minor currency units.
    pub amount: i64,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
}

/// POST body. Everything is optional; unknown keys are kept.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewBooking {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub service: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// PUT body. Only the keys present are changed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingUpdate {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub service: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub status: Option<BookingStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub amount: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Booking {
    /// New bookings always start pending/pending; the id is left for the store.
    pub fn from_new(mut new: NewBooking, now: DateTime<Utc>) -> Self {
        strip_reserved(&mut new.extra, RESERVED);
        Self {
            id: String::new(),
            customer_name: new.customer_name,
            customer_email: new.customer_email,
            customer_phone: new.customer_phone,
            service: new.service,
            date: new.date,
            time: new.time,
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Pending,
            amount: new.amount,
            created_at: now,
            extra: new.extra,
        }
    }
}

impl BookingUpdate {
    pub fn apply(self, booking: &mut Booking) {
        if let Some(v) = self.customer_name {
            booking.customer_name = Some(v);
        }
        if let Some(v) = self.customer_email {
            booking.customer_email = Some(v);
        }
        if let Some(v) = self.customer_phone {
            booking.customer_phone = Some(v);
        }
        if let Some(v) = self.service {
            booking.service = Some(v);
        }
        if let Some(v) = self.date {
            booking.date = Some(v);
        }
        if let Some(v) = self.time {
            booking.time = Some(v);
        }
        if let Some(v) = self.status {
            booking.status = v;
        }
        if let Some(v) = self.payment_status {
            booking.payment_status = v;
        }
        if let Some(v) = self.amount {
            booking.amount = v;
        }
        merge_extra(&mut booking.extra, self.extra, RESERVED);
    }
}

impl Record for Booking {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_new_forces_defaults() {
        let new: NewBooking = serde_json::from_value(serde_json::json!({
            "customerName": "Ana",
            "amount": 900,
            "status": "confirmed",
            "paymentStatus": "paid",
            "id": "99",
            "notes": "first visit"
        }))
        .unwrap();

        let booking = Booking::from_new(new, Utc::now());
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.payment_status, PaymentStatus::Pending);
        assert_eq!(booking.amount, 900);
        assert!(booking.id.is_empty());
        assert_eq!(booking.extra.len(), 1);
        assert_eq!(booking.extra["notes"], "first visit");
    }

    #[test]
    fn test_serializes_camel_case_without_duplicate_keys() {
        let new: NewBooking =
            serde_json::from_value(serde_json::json!({"status": "confirmed", "source": "web"}))
                .unwrap();
        let mut booking = Booking::from_new(new, Utc::now());
        booking.assign_id("3".to_string());

        let json = serde_json::to_string(&booking).unwrap();
        assert_eq!(json.matches("\"status\"").count(), 1);

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["id"], "3");
        assert_eq!(value["paymentStatus"], "pending");
        assert_eq!(value["source"], "web");
        assert!(value["createdAt"].is_string());
    }

    #[test]
    fn test_update_applies_present_fields_only() {
        let mut booking = Booking::from_new(
            NewBooking {
                customer_name: Some("Ana".into()),
                amount: 1200,
                ..Default::default()
            },
            Utc::now(),
        );
        let update: BookingUpdate = serde_json::from_value(serde_json::json!({
            "status": "confirmed",
            "paymentStatus": "paid",
            "createdAt": "1999-01-01T00:00:00Z",
            "room": "B"
        }))
        .unwrap();
        let created_at = booking.created_at;

        update.apply(&mut booking);
        assert_eq!(booking.customer_name.as_deref(), Some("Ana"));
        assert_eq!(booking.amount, 1200);
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.payment_status, PaymentStatus::Paid);
        assert_eq!(booking.created_at, created_at);
        assert_eq!(booking.extra["room"], "B");
    }

    #[test]
    fn test_null_fields_accepted_on_create() {
        let new: NewBooking = serde_json::from_value(serde_json::json!({
            "customerName": "Ana",
            "customerPhone": null,
            "amount": null
        }))
        .unwrap();

        let booking = Booking::from_new(new, Utc::now());
        assert_eq!(booking.amount, 0);
        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["customerPhone"], Value::Null);
        assert_eq!(value["customerName"], "Ana");
    }

    #[test]
    fn test_rejects_unknown_status() {
        let result: Result<BookingUpdate, _> =
            serde_json::from_value(serde_json::json!({"status": "archived"}));
        assert!(result.is_err());
    }
}
