use axum::{Json, extract::State};
use serde::Serialize;

use crate::{AppState, database::DatabaseInfo, error::AppError};

#[derive(Debug, Serialize)]
pub struct TestDbResponse {
    pub connection: &'static str,
    #[serde(flatten)]
    pub info: DatabaseInfo,
}

/// 数据库连通性检查：当前用户、数据库名以及 public 下的表
#[axum::debug_handler]
pub async fn test_db(State(state): State<AppState>) -> Result<Json<TestDbResponse>, AppError> {
    let info = state.store.database_info().await.map_err(|e| {
        tracing::error!("Database error: {:?}", e);
        AppError::DatabaseUnavailable
    })?;

    Ok(Json(TestDbResponse {
        connection: "success",
        info,
    }))
}
