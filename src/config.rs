use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub admin_email: String,
    pub admin_password: String,
    pub admin_name: String,
    pub seed_demo_data: bool,
    pub request_timeout_secs: u64,
    /// Contact form submissions accepted per email per hour.
    pub contact_rate_limit: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3001),
            admin_email: env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@tarot777.com".to_string()),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string()),
            admin_name: env::var("ADMIN_NAME").unwrap_or_else(|_| "Admin User".to_string()),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| !matches!(v.trim(), "0" | "false" | "no" | "off"))
                .unwrap_or(true),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            contact_rate_limit: env::var("CONTACT_RATE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
