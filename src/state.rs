use crate::config::AppConfig;
use crate::models::{Booking, Client, ContactSubmission};
use crate::services::auth::demo::DemoIdentityProvider;
use crate::services::auth::IdentityProvider;
use crate::services::contact_form::SubmissionLimiter;
use crate::store::{seed, MemoryStore, Store};

pub struct AppState {
    pub config: AppConfig,
    pub identity: Box<dyn IdentityProvider>,
    pub bookings: Box<dyn Store<Booking>>,
    pub clients: Box<dyn Store<Client>>,
    pub submissions: Box<dyn Store<ContactSubmission>>,
    pub contact_limiter: SubmissionLimiter,
}

impl AppState {
    /// Demo identity provider plus in-memory stores, seeded per config.
    pub fn in_memory(config: AppConfig) -> Self {
        let (bookings, clients, submissions) = if config.seed_demo_data {
            (
                MemoryStore::seeded(seed::demo_bookings()),
                MemoryStore::seeded(seed::demo_clients()),
                MemoryStore::seeded(seed::demo_contact_submissions()),
            )
        } else {
            (MemoryStore::new(), MemoryStore::new(), MemoryStore::new())
        };

        Self {
            identity: Box::new(DemoIdentityProvider::from_config(&config)),
            bookings: Box::new(bookings),
            clients: Box::new(clients),
            submissions: Box::new(submissions),
            contact_limiter: SubmissionLimiter::new(config.contact_rate_limit),
            config,
        }
    }
}
