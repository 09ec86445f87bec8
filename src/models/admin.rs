use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub email: String,
    pub name: String,
}

/// Returned by a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: String,
    pub admin: AdminUser,
}

impl Session {
    /// The token only embeds the issue time; it is a demo placeholder and is
    /// never checked by any endpoint.
    pub fn issue(admin: AdminUser, now: DateTime<Utc>) -> Self {
        Self {
            token: format!("demo-token-{}", now.timestamp()),
            admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_embeds_timestamp() {
        let admin = AdminUser {
            id: 1,
            email: "admin@tarot777.com".to_string(),
            name: "Admin User".to_string(),
        };
        let now = DateTime::from_timestamp(1_707_559_200, 0).unwrap();

        let session = Session::issue(admin, now);
        assert_eq!(session.token, "demo-token-1707559200");
        assert_eq!(session.admin.id, 1);
    }
}
