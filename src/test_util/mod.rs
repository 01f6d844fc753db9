use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::AppState;
use crate::config::{Config, DatabaseConfig};
use crate::database::{DatabaseInfo, User, UserProfile, UserStore};

pub const ADMIN_EMAIL: &str = "admin@nutrifitt.com";
pub const ADMIN_PASSWORD: &str = "admin123";

pub fn test_config() -> Config {
    Config {
        database: DatabaseConfig {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            name: "nutrifitt_test".to_string(),
            user: "postgres".to_string(),
            password: String::new(),
            max_connections: 1,
        },
        jwt_secret: "test-secret".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 3001,
        frontend_url: "http://localhost:3000".to_string(),
        app_version: "1.0.0".to_string(),
    }
}

/// Builds a user with a low-cost bcrypt hash so tests stay fast.
pub fn make_user(name: &str, email: &str, password: &str, role: &str, active: bool) -> User {
    User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        password_hash: bcrypt::hash(password, 4).unwrap(),
        role: role.to_string(),
        active,
        created_at: Utc::now(),
    }
}

/// In-memory stand-in for the users table.
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
    failing: bool,
}

impl MemoryUserStore {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            failing: false,
        }
    }

    /// Every call fails as if the pool could not hand out a connection.
    pub fn failing() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    pub fn remove(&self, user_id: Uuid) {
        self.users.lock().unwrap().retain(|u| u.id != user_id);
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.failing {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn database_info(&self) -> Result<DatabaseInfo, sqlx::Error> {
        self.check()?;
        Ok(DatabaseInfo {
            user: "postgres".to_string(),
            database: "nutrifitt_test".to_string(),
            tables: vec!["subscription_plans".to_string(), "users".to_string()],
        })
    }

    async fn find_active_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        self.check()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.active && u.email == email)
            .cloned())
    }

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, sqlx::Error> {
        self.check()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .map(UserProfile::from))
    }
}

pub fn test_state(store: Arc<MemoryUserStore>) -> AppState {
    AppState {
        store,
        config: test_config(),
    }
}

/// Store seeded with an active admin, an active client and an inactive client.
pub fn seeded_store() -> Arc<MemoryUserStore> {
    Arc::new(MemoryUserStore::with_users(vec![
        make_user("Administrador", ADMIN_EMAIL, ADMIN_PASSWORD, "admin", true),
        make_user("Maria", "maria@nutrifitt.com", "maria123", "client", true),
        make_user("Inativo", "inativo@nutrifitt.com", "inativo123", "client", false),
    ]))
}
