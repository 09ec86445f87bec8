//! Sample records loaded at start-up when `SEED_DEMO_DATA` is on.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Map;

use crate::models::{
    Booking, BookingStatus, Client, ContactSubmission, PaymentStatus, ServicePrice,
    SubmissionStatus,
};

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

pub fn demo_bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: String::new(),
            customer_name: Some("John Doe".to_string()),
            customer_email: Some("john@example.com".to_string()),
            customer_phone: Some("9876543210".to_string()),
            service: Some("Tarot Reading".to_string()),
            date: Some("2024-02-15".to_string()),
            time: Some("10:00 AM".to_string()),
            status: BookingStatus::Confirmed,
            payment_status: PaymentStatus::Paid,
            amount: 1500,
            created_at: at(2024, 2, 10, 10),
            extra: Map::new(),
        },
        Booking {
            id: String::new(),
            customer_name: Some("Jane Smith".to_string()),
            customer_email: Some("jane@example.com".to_string()),
            customer_phone: Some("9876543211".to_string()),
            service: Some("Love Reading".to_string()),
            date: Some("2024-02-16".to_string()),
            time: Some("2:00 PM".to_string()),
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Pending,
            amount: 1200,
            created_at: at(2024, 2, 11, 14),
            extra: Map::new(),
        },
    ]
}

pub fn demo_clients() -> Vec<Client> {
    let client = |name: &str, email: &str, phone: &str, bookings, spent, last, created| Client {
        id: String::new(),
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        phone: Some(phone.to_string()),
        total_bookings: bookings,
        total_spent: spent,
        last_booking: last,
        created_at: created,
        extra: Map::new(),
    };

    vec![
        client(
            "John Doe",
            "john@example.com",
            "9876543210",
            3,
            4500,
            NaiveDate::from_ymd_opt(2024, 2, 15),
            at(2024, 1, 15, 10),
        ),
        client(
            "Jane Smith",
            "jane@example.com",
            "9876543211",
            2,
            2400,
            NaiveDate::from_ymd_opt(2024, 2, 16),
            at(2024, 1, 20, 14),
        ),
        client(
            "Mike Johnson",
            "mike@example.com",
            "9876543212",
            1,
            1500,
            NaiveDate::from_ymd_opt(2024, 2, 10),
            at(2024, 2, 1, 9),
        ),
    ]
}

pub fn demo_contact_submissions() -> Vec<ContactSubmission> {
    vec![
        ContactSubmission {
            id: String::new(),
            name: Some("John Doe".to_string()),
            email: Some("john@example.com".to_string()),
            phone: Some("9876543210".to_string()),
            reason: Some("love".to_string()),
            preferred_contact: Some("email".to_string()),
            message: Some("I need help with my love life".to_string()),
            selected_service: Some("Love Reading".to_string()),
            service_price: Some(ServicePrice::Text("1200".to_string())),
            status: SubmissionStatus::New,
            created_at: at(2024, 2, 14, 10),
            extra: Map::new(),
        },
        ContactSubmission {
            id: String::new(),
            name: Some("Jane Smith".to_string()),
            email: Some("jane@example.com".to_string()),
            phone: Some("9876543211".to_string()),
            reason: Some("career".to_string()),
            preferred_contact: Some("phone".to_string()),
            message: Some("Want to know about my career prospects".to_string()),
            selected_service: Some("Career Guidance".to_string()),
            service_price: Some(ServicePrice::Text("1500".to_string())),
            status: SubmissionStatus::New,
            created_at: at(2024, 2, 14, 11),
            extra: Map::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_timestamps_are_real() {
        let first = &demo_bookings()[0];
        assert_eq!(
            serde_json::to_value(first.created_at).unwrap(),
            "2024-02-10T10:00:00Z"
        );
    }

    #[test]
    fn test_demo_sizes() {
        assert_eq!(demo_bookings().len(), 2);
        assert_eq!(demo_clients().len(), 3);
        assert_eq!(demo_contact_submissions().len(), 2);
    }
}
