use bcrypt::verify;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;

/// Session tokens live exactly this long after issuance.
pub const TOKEN_LIFETIME_SECS: i64 = 24 * 60 * 60;

pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password.as_bytes(), hash)
}

/// Runs bcrypt on the blocking pool; a failed join is reported as a bcrypt error.
pub async fn verify_password_blocking(
    password: String,
    hash: String,
) -> Result<bool, bcrypt::BcryptError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .unwrap_or_else(|e| {
            Err(bcrypt::BcryptError::Io(std::io::Error::other(e.to_string())))
        })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: Uuid,
    pub email: String,
    pub iat: i64, // 签发时间
    pub exp: i64, // 过期时间
}

pub fn generate_token(
    user_id: Uuid,
    email: &str,
    config: &Config,
) -> Result<String, jsonwebtoken::errors::Error> {
    let issued_at = Utc::now().timestamp();
    let expiration = issued_at + TOKEN_LIFETIME_SECS;

    let claims = Claims {
        user_id,
        email: email.to_string(),
        iat: issued_at,
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
}

pub fn verify_token(token: &str, config: &Config) -> Result<Claims, jsonwebtoken::errors::Error> {
    // exp 无宽限期，过期即失效
    let mut validation = Validation::default();
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}
