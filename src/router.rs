//! Route table.
//!
//! Each resource is its own sub-router. Its routes are wrapped, innermost
//! first, in the request timeout, the 408 envelope and the resource's CORS
//! layer, so preflights and timeouts look the same as any other response.
//! Request tracing sits on top of the merged router.

use std::sync::Arc;
use std::time::Duration;

use axum::handler::Handler;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::cors::CorsPolicy;
use crate::handlers::{self, auth, bookings, clients, contact, contact_submissions, health};
use crate::state::AppState;

type Routes = Router<Arc<AppState>>;

pub fn build(state: Arc<AppState>) -> Router {
    let timeout = state.config.request_timeout();

    Router::new()
        .merge(guarded(health_routes(), CorsPolicy::Global, timeout))
        .merge(guarded(login_routes(), CorsPolicy::Login, timeout))
        .merge(guarded(booking_routes(), CorsPolicy::Bookings, timeout))
        .merge(guarded(client_routes(), CorsPolicy::Clients, timeout))
        .merge(guarded(contact_routes(), CorsPolicy::ContactForm, timeout))
        .merge(guarded(
            contact_submission_routes(),
            CorsPolicy::ContactSubmissions,
            timeout,
        ))
        .fallback(handlers::not_found.layer(CorsPolicy::Global.layer()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn guarded(routes: Routes, policy: CorsPolicy, timeout: Duration) -> Routes {
    routes
        .route_layer(TimeoutLayer::new(timeout))
        .route_layer(middleware::map_response(handlers::timeout_envelope))
        .route_layer(policy.layer())
}

fn health_routes() -> Routes {
    Router::new()
        .route(
            "/api/health",
            get(health::health).fallback(handlers::method_not_allowed),
        )
        .route(
            "/health",
            get(health::health).fallback(handlers::method_not_allowed),
        )
}

fn login_routes() -> Routes {
    Router::new().route(
        "/api/auth/login",
        post(auth::login).fallback(handlers::method_not_allowed),
    )
}

fn booking_routes() -> Routes {
    Router::new()
        .route(
            "/api/bookings",
            get(bookings::list)
                .post(bookings::create)
                .put(bookings::update_by_query)
                .delete(bookings::remove_by_query)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/bookings/stats",
            get(bookings::stats).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/bookings/:id",
            get(bookings::get_one)
                .put(bookings::update)
                .delete(bookings::remove)
                .fallback(handlers::method_not_allowed),
        )
}

fn client_routes() -> Routes {
    Router::new()
        .route(
            "/api/clients",
            get(clients::list)
                .post(clients::create)
                .put(clients::update_by_query)
                .delete(clients::remove_by_query)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/clients/:id",
            get(clients::get_one)
                .put(clients::update)
                .delete(clients::remove)
                .fallback(handlers::method_not_allowed),
        )
}

fn contact_routes() -> Routes {
    Router::new().route(
        "/api/contact",
        get(contact_submissions::list)
            .post(contact::submit)
            .fallback(handlers::method_not_allowed),
    )
}

fn contact_submission_routes() -> Routes {
    Router::new()
        .route(
            "/api/contact-submissions",
            get(contact_submissions::list)
                .post(contact_submissions::create)
                .put(contact_submissions::update_by_query)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/contact-submissions/:id",
            get(contact_submissions::get_one)
                .put(contact_submissions::update)
                .fallback(handlers::method_not_allowed),
        )
}
