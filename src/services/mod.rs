pub mod auth;
pub mod contact_form;
pub mod stats;
