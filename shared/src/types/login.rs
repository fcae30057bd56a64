use serde::{Deserialize, Serialize};

use super::identity::Role;

// ---------------------------------------------------------------------------
// Login wire types (POST /auth/login)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The user summary the backend returns alongside the token.
///
/// Informational only; the session identity is always derived from the
/// token claims, not from this struct, so there is a single source of truth.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    pub id: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Signed JWT string, fed straight into the session store.
    pub token: String,
    pub user: LoginUser,
}
