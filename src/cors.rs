//! Per-resource CORS policy.
//!
//! Every route group is wrapped in its own `CorsLayer`. The layer answers any
//! `OPTIONS` request itself with the group's verb list, before the handler or
//! body parsing runs, and stamps the wildcard origin on every other response.

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorsPolicy {
    Login,
    Bookings,
    Clients,
    ContactSubmissions,
    ContactForm,
    /// Health check and paths that belong to no resource.
    Global,
}

impl CorsPolicy {
    pub fn allow_methods(self) -> Vec<Method> {
        match self {
            CorsPolicy::Login => vec![Method::GET, Method::POST, Method::OPTIONS],
            CorsPolicy::ContactSubmissions => {
                vec![Method::GET, Method::POST, Method::PUT, Method::OPTIONS]
            }
            CorsPolicy::Bookings
            | CorsPolicy::Clients
            | CorsPolicy::ContactForm
            | CorsPolicy::Global => vec![
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ],
        }
    }

    pub fn layer(self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(self.allow_methods())
            .allow_headers([CONTENT_TYPE, AUTHORIZATION])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_verb_lists() {
        assert_eq!(
            CorsPolicy::Login.allow_methods(),
            vec![Method::GET, Method::POST, Method::OPTIONS]
        );
        assert!(!CorsPolicy::ContactSubmissions
            .allow_methods()
            .contains(&Method::DELETE));
        assert_eq!(
            CorsPolicy::Clients.allow_methods(),
            CorsPolicy::Bookings.allow_methods()
        );
        assert!(CorsPolicy::Global.allow_methods().contains(&Method::DELETE));
    }
}
