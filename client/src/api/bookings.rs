use reqwest::Method;
use tracing::{debug, info};

use shared::types::{Booking, NewBooking};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// GET /bookings: every booking (management view).
    pub async fn all_bookings(&self, token: &str) -> Result<Vec<Booking>, ApiError> {
        debug!("Fetching all bookings");
        let response = self
            .request(Method::GET, "/bookings", Some(token))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// GET /bookings/my: the caller's own bookings.
    pub async fn my_bookings(&self, token: &str) -> Result<Vec<Booking>, ApiError> {
        debug!("Fetching own bookings");
        let response = self
            .request(Method::GET, "/bookings/my", Some(token))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// POST /bookings: book a room for a day. A slot clash comes back as
    /// [`ApiError::Conflict`] with the backend's explanation.
    pub async fn create_booking(&self, token: &str, booking: &NewBooking) -> Result<(), ApiError> {
        info!("Booking room {} on {}", booking.room_id, booking.date);
        let response = self
            .request(Method::POST, "/bookings", Some(token))
            .json(booking)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// POST /bookings/{id}/cancel
    pub async fn cancel_booking(&self, token: &str, id: &str) -> Result<(), ApiError> {
        info!("Cancelling booking {id}");
        let response = self
            .request(Method::POST, &format!("/bookings/{id}/cancel"), Some(token))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// POST /bookings/{id}/confirm: approve a pending booking (management).
    pub async fn confirm_booking(&self, token: &str, id: &str) -> Result<(), ApiError> {
        info!("Confirming booking {id}");
        let response = self
            .request(
                Method::POST,
                &format!("/bookings/{id}/confirm"),
                Some(token),
            )
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
