use reqwest::Method;
use tracing::debug;

use shared::types::{NewRoom, Room};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// GET /rooms/active: rooms currently open for booking.
    pub async fn active_rooms(&self, token: &str) -> Result<Vec<Room>, ApiError> {
        debug!("Fetching active rooms");
        let response = self
            .request(Method::GET, "/rooms/active", Some(token))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// GET /rooms/all: every room, including deactivated ones (admin view).
    pub async fn all_rooms(&self, token: &str) -> Result<Vec<Room>, ApiError> {
        debug!("Fetching all rooms");
        let response = self
            .request(Method::GET, "/rooms/all", Some(token))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// POST /rooms: create a room, returning the stored record.
    pub async fn create_room(&self, token: &str, room: &NewRoom) -> Result<Room, ApiError> {
        let response = self
            .request(Method::POST, "/rooms", Some(token))
            .json(room)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// PUT /rooms/{id}: update name, capacity and location.
    pub async fn update_room(
        &self,
        token: &str,
        id: &str,
        room: &NewRoom,
    ) -> Result<Room, ApiError> {
        let response = self
            .request(Method::PUT, &format!("/rooms/{id}"), Some(token))
            .json(room)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// PATCH /rooms/{id}/active: activate or deactivate a room.
    pub async fn set_room_active(
        &self,
        token: &str,
        id: &str,
        active: bool,
    ) -> Result<(), ApiError> {
        let response = self
            .request(Method::PATCH, &format!("/rooms/{id}/active"), Some(token))
            .json(&serde_json::json!({ "isActive": active }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
