use serde::{Deserialize, Serialize};

use crate::database::User;

/// Absent fields fall back to empty strings and fail at lookup or verification.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}
