use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::{DatabaseInfo, User, UserProfile, UserStore};

/// 基于 PostgreSQL 连接池的用户存储
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn database_info(&self) -> Result<DatabaseInfo, sqlx::Error> {
        // 连接在 conn 离开作用域时归还连接池
        let mut conn = self.pool.acquire().await?;

        let (user, database): (String, String) =
            sqlx::query_as("SELECT current_user::text, current_database()::text")
                .fetch_one(&mut *conn)
                .await?;

        let tables: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT table_name::text
            FROM information_schema.tables
            WHERE table_schema = 'public'
            ORDER BY table_name
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(DatabaseInfo {
            user,
            database,
            tables,
        })
    }

    async fn find_active_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, role, active, created_at
            FROM users
            WHERE email = $1 AND active = true
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(user)
    }

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;

        let profile = sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT id, name, email, role, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(profile)
    }
}
