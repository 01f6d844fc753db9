// 数据库模块
// 包含用户实体定义和存储接口

pub mod models;
pub mod repositories;

use async_trait::async_trait;
use uuid::Uuid;

pub use models::user::{DatabaseInfo, User, UserProfile};
pub use repositories::user::PgUserStore;

/// 用户存储接口
///
/// Every call checks out at most one pooled connection and hands it back
/// before returning, whatever the outcome.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Connected role, database name and the tables of the `public` schema.
    async fn database_info(&self) -> Result<DatabaseInfo, sqlx::Error>;

    /// Only rows with `active = true` are returned.
    async fn find_active_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error>;

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, sqlx::Error>;
}
