pub mod demo;

use async_trait::async_trait;
use serde::Deserialize;

use crate::models::AdminUser;

/// Login body. Missing fields count as empty strings and simply fail to match.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AdminUser, AuthError>;
}
