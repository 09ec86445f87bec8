use async_trait::async_trait;

use super::{AuthError, Credentials, IdentityProvider};
use crate::config::AppConfig;
use crate::models::AdminUser;

/// Single hardcoded admin account, taken from config.
pub struct DemoIdentityProvider {
    admin: AdminUser,
    password: String,
}

impl DemoIdentityProvider {
    pub fn new(email: String, password: String, name: String) -> Self {
        Self {
            admin: AdminUser { id: 1, email, name },
            password,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.admin_email.clone(),
            config.admin_password.clone(),
            config.admin_name.clone(),
        )
    }
}

#[async_trait]
impl IdentityProvider for DemoIdentityProvider {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AdminUser, AuthError> {
        if credentials.email == self.admin.email && credentials.password == self.password {
            Ok(self.admin.clone())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> DemoIdentityProvider {
        DemoIdentityProvider::new(
            "admin@tarot777.com".to_string(),
            "admin123".to_string(),
            "Admin User".to_string(),
        )
    }

    fn creds(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_accepts_demo_pair() {
        let admin = provider()
            .authenticate(&creds("admin@tarot777.com", "admin123"))
            .await
            .unwrap();
        assert_eq!(admin.id, 1);
        assert_eq!(admin.email, "admin@tarot777.com");
        assert_eq!(admin.name, "Admin User");
    }

    #[tokio::test]
    async fn test_rejects_everything_else() {
        let provider = provider();
        for (email, password) in [
            ("admin@tarot777.com", "wrong"),
            ("someone@example.com", "admin123"),
            ("ADMIN@tarot777.com", "admin123"),
            ("", ""),
        ] {
            let result = provider.authenticate(&creds(email, password)).await;
            assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        }
    }
}
