use reqwest::Method;
use tracing::{debug, info};

use shared::types::{NewUser, Role, UserAccount};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// GET /users: every account (admin view).
    pub async fn users(&self, token: &str) -> Result<Vec<UserAccount>, ApiError> {
        debug!("Fetching user list");
        let response = self
            .request(Method::GET, "/users", Some(token))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// POST /users: create an account, returning the stored record.
    pub async fn create_user(&self, token: &str, user: &NewUser) -> Result<UserAccount, ApiError> {
        info!("Creating user {}", user.email);
        let response = self
            .request(Method::POST, "/users", Some(token))
            .json(user)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// PATCH /users/{id}/role
    ///
    /// Takes effect on the target's next login; their current token still
    /// carries the old role claim.
    pub async fn set_user_role(&self, token: &str, id: &str, role: &Role) -> Result<(), ApiError> {
        info!("Setting role of user {id} to {role}");
        let response = self
            .request(Method::PATCH, &format!("/users/{id}/role"), Some(token))
            .json(&serde_json::json!({ "role": role }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// PATCH /users/{id}/active: enable or disable an account.
    pub async fn set_user_active(
        &self,
        token: &str,
        id: &str,
        active: bool,
    ) -> Result<(), ApiError> {
        info!(
            "{} user {id}",
            if active { "Activating" } else { "Deactivating" }
        );
        let response = self
            .request(Method::PATCH, &format!("/users/{id}/active"), Some(token))
            .json(&serde_json::json!({ "isActive": active }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// DELETE /users/{id}
    pub async fn delete_user(&self, token: &str, id: &str) -> Result<(), ApiError> {
        info!("Deleting user {id}");
        let response = self
            .request(Method::DELETE, &format!("/users/{id}"), Some(token))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
