pub mod admin;
pub mod booking;
pub mod client;
pub mod contact_submission;

pub use admin::{AdminUser, Session};
pub use booking::{Booking, BookingStatus, BookingUpdate, NewBooking, PaymentStatus};
pub use client::{Client, ClientUpdate, NewClient};
pub use contact_submission::{
    ContactSubmission, ContactSubmissionUpdate, NewContactSubmission, ServicePrice,
    SubmissionStatus,
};

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Treat an explicit `null` like a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Drop caller-supplied keys that the server assigns itself.
pub(crate) fn strip_reserved(extra: &mut Map<String, Value>, reserved: &[&str]) {
    extra.retain(|key, _| !reserved.contains(&key.as_str()));
}

/// Overlay `incoming` on `extra`, skipping server-owned keys.
pub(crate) fn merge_extra(
    extra: &mut Map<String, Value>,
    mut incoming: Map<String, Value>,
    reserved: &[&str],
) {
    strip_reserved(&mut incoming, reserved);
    extra.extend(incoming);
}
