use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{merge_extra, strip_reserved};
use crate::store::Record;

const RESERVED: &[&str] = &["id", "totalBookings", "totalSpent", "createdAt"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub total_bookings: u32,
    /// Minor currency units.
    pub total_spent: u64,
    #[serde(default)]
    pub last_booking: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewClient {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub last_booking: Option<NaiveDate>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// PUT body. Counters are editable here, unlike on create.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub total_bookings: Option<u32>,
    pub total_spent: Option<u64>,
    pub last_booking: Option<NaiveDate>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Client {
    pub fn from_new(mut new: NewClient, now: DateTime<Utc>) -> Self {
        strip_reserved(&mut new.extra, RESERVED);
        Self {
            id: String::new(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            total_bookings: 0,
            total_spent: 0,
            last_booking: new.last_booking,
            created_at: now,
            extra: new.extra,
        }
    }
}

impl ClientUpdate {
    pub fn apply(self, client: &mut Client) {
        if let Some(v) = self.name {
            client.name = Some(v);
        }
        if let Some(v) = self.email {
            client.email = Some(v);
        }
        if let Some(v) = self.phone {
            client.phone = Some(v);
        }
        if let Some(v) = self.total_bookings {
            client.total_bookings = v;
        }
        if let Some(v) = self.total_spent {
            client.total_spent = v;
        }
        if let Some(v) = self.last_booking {
            client.last_booking = Some(v);
        }
        merge_extra(&mut client.extra, self.extra, &["id", "createdAt"]);
    }
}

impl Record for Client {
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
    fn test_from_new_zeroes_counters() {
        let new: NewClient = serde_json::from_value(serde_json::json!({
            "name": "Mike Johnson",
            "totalBookings": 12,
            "totalSpent": 99999,
            "lastBooking": "2024-02-10"
        }))
        .unwrap();

        let client = Client::from_new(new, Utc::now());
        assert_eq!(client.total_bookings, 0);
        assert_eq!(client.total_spent, 0);
        assert_eq!(client.last_booking, NaiveDate::from_ymd_opt(2024, 2, 10));
        assert!(client.extra.is_empty());
    }

    #[test]
    fn test_unknown_fields_serialize_as_null() {
        let new: NewClient = serde_json::from_value(serde_json::json!({
            "name": "Ana",
            "phone": null,
            "lastBooking": null
        }))
        .unwrap();
        let client = Client::from_new(new, Utc::now());
        let value = serde_json::to_value(&client).unwrap();
        assert_eq!(value["name"], "Ana");
        assert_eq!(value["phone"], Value::Null);
        assert_eq!(value["email"], Value::Null);
        assert_eq!(value["lastBooking"], Value::Null);
        assert_eq!(value["totalBookings"], 0);
    }

    #[test]
    fn test_rejects_negative_counter_on_update() {
        let result: Result<ClientUpdate, _> =
            serde_json::from_value(serde_json::json!({"totalSpent": -5}));
        assert!(result.is_err());
    }

    #[test]
    fn test_update_counters() {
        let mut client = Client::from_new(NewClient::default(), Utc::now());
        let update: ClientUpdate =
            serde_json::from_value(serde_json::json!({"totalBookings": 2, "totalSpent": 2400}))
                .unwrap();
        update.apply(&mut client);
        assert_eq!(client.total_bookings, 2);
        assert_eq!(client.total_spent, 2400);
        assert!(client.extra.is_empty());
    }
}
