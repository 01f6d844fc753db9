use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Every failure a handler or the auth gate can surface to a client.
///
/// Status codes and client-facing messages are decided here and nowhere else;
/// infrastructure detail is logged by the caller before the error is built.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("bearer token missing")]
    TokenRequired,
    #[error("bearer token invalid or expired")]
    InvalidToken,
    #[error("no active user with that email")]
    UserNotFound,
    #[error("password does not match")]
    InvalidPassword,
    #[error("user no longer exists")]
    ProfileNotFound,
    #[error("database unavailable")]
    DatabaseUnavailable,
    #[error("internal server error")]
    InternalServerError,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::TokenRequired | AppError::UserNotFound | AppError::InvalidPassword => {
                StatusCode::UNAUTHORIZED
            }
            AppError::InvalidToken => StatusCode::FORBIDDEN,
            AppError::ProfileNotFound => StatusCode::NOT_FOUND,
            AppError::DatabaseUnavailable | AppError::InternalServerError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AppError::TokenRequired => "Token necessário",
            AppError::InvalidToken => "Token inválido",
            AppError::UserNotFound | AppError::ProfileNotFound => "Usuário não encontrado",
            AppError::InvalidPassword => "Senha inválida",
            AppError::DatabaseUnavailable => "Database connection failed",
            AppError::InternalServerError => "Erro interno do servidor",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message(),
        });

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    #[test]
    fn auth_failures_map_to_401_and_403() {
        assert_eq!(AppError::TokenRequired.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::UserNotFound.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::InvalidPassword.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::InvalidToken.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn vanished_profile_is_404() {
        assert_eq!(AppError::ProfileNotFound.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn body_carries_only_the_error_message() {
        let response = AppError::DatabaseUnavailable.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), 1024).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Database connection failed" }));
    }
}
