use reqwest::Method;
use tracing::info;

use shared::types::{LoginRequest, LoginResponse};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// POST /auth/login: exchange credentials for a bearer token.
    ///
    /// The returned token is handed to the session store; the user summary
    /// in the response is informational only.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        info!("Authenticating {} against the backend", email);
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .request(Method::POST, "/auth/login", None)
            .json(&body)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }
}
