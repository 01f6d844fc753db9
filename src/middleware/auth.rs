use axum::{
    RequestExt,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use crate::{AppState, error::AppError, utils::verify_token};

/// Rejects requests without a valid `Authorization: Bearer <token>` header.
///
/// A missing or non-Bearer header is `TokenRequired` (401); a token that fails
/// signature or expiry checks is `InvalidToken` (403). On success the decoded
/// [`Claims`](crate::utils::Claims) are inserted into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(Authorization(bearer)) = req
        .extract_parts::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AppError::TokenRequired)?;

    let claims = verify_token(bearer.token(), &state.config).map_err(|e| {
        tracing::debug!("Rejected bearer token: {}", e);
        AppError::InvalidToken
    })?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
