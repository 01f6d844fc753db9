use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

pub const ROLE_ADMIN: &str = "admin";

/// 用户实体，对应 users 表
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

/// Public subset of a user returned by the profile endpoint.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DatabaseInfo {
    pub user: String,
    pub database: String,
    pub tables: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Admin".into(),
            email: "admin@nutrifitt.com".into(),
            password_hash: "$2b$04$abcdefghijklmnopqrstuv".into(),
            role: ROLE_ADMIN.into(),
            active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn password_hash_is_never_serialized() {
        let value = serde_json::to_value(sample()).unwrap();

        assert!(value.get("password_hash").is_none());
        assert_eq!(value["email"], "admin@nutrifitt.com");
        assert_eq!(value["active"], true);
    }

    #[test]
    fn profile_keeps_identity_fields() {
        let user = sample();
        let profile = UserProfile::from(&user);

        assert_eq!(profile.id, user.id);
        assert_eq!(profile.role, "admin");
        assert!(user.is_admin());
    }
}
