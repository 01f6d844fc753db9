use axum::extract::{Extension, Json, State};

use crate::{
    AppState,
    database::UserProfile,
    error::AppError,
    utils::{Claims, generate_token, verify_password_blocking},
};

use super::model::{LoginRequest, LoginResponse};

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    tracing::debug!("Login attempt: {}", req.email);

    let user = match state.store.find_active_by_email(&req.email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::info!("Login rejected, no active user: {}", req.email);
            return Err(AppError::UserNotFound);
        }
        Err(e) => {
            tracing::error!("Login error: {:?}", e);
            return Err(AppError::InternalServerError);
        }
    };

    // 验证密码
    match verify_password_blocking(req.password, user.password_hash.clone()).await {
        Ok(true) => (),
        Ok(false) => {
            tracing::info!("Login rejected, invalid password: {}", user.id);
            return Err(AppError::InvalidPassword);
        }
        Err(e) => {
            tracing::error!("Password verification failed for {}: {}", user.id, e);
            return Err(AppError::InternalServerError);
        }
    }

    // 生成 token
    let access_token = generate_token(user.id, &user.email, &state.config).map_err(|e| {
        tracing::error!("Failed to sign token for {}: {}", user.id, e);
        AppError::InternalServerError
    })?;

    tracing::info!(user_id = %user.id, admin = user.is_admin(), "Login successful");

    Ok(Json(LoginResponse { access_token, user }))
}

#[axum::debug_handler]
pub async fn profile(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
) -> Result<Json<UserProfile>, AppError> {
    match state.store.find_profile(claims.user_id).await {
        Ok(Some(profile)) => Ok(Json(profile)),
        Ok(None) => Err(AppError::ProfileNotFound),
        Err(e) => {
            tracing::error!("Profile error: {:?}", e);
            Err(AppError::InternalServerError)
        }
    }
}
