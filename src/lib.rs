pub mod config;
pub mod cors;
pub mod envelope;
pub mod errors;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod store;
