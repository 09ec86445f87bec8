use serde::Serialize;

use crate::models::{Booking, BookingStatus, PaymentStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStats {
    pub total_bookings: usize,
    pub confirmed: usize,
    pub pending: usize,
    /// Sum of `amount` over paid bookings only.
    pub revenue: i64,
}

impl BookingStats {
    pub fn from_bookings(bookings: &[Booking]) -> Self {
        bookings.iter().fold(
            Self {
                total_bookings: bookings.len(),
                ..Self::default()
            },
            |mut stats, b| {
                match b.status {
                    BookingStatus::Confirmed => stats.confirmed += 1,
                    BookingStatus::Pending => stats.pending += 1,
                    BookingStatus::Cancelled => {}
                }
                if b.payment_status == PaymentStatus::Paid {
                    stats.revenue += b.amount;
                }
                stats
            },
        )
    }
}
