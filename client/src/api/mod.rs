mod auth;
mod bookings;
mod rooms;
mod users;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use thiserror::Error;

use shared::types::{ApiConfig, ApiErrorBody};

/// Failures talking to the booking backend.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend rejected the credential. The caller should drop the
    /// session and send the user back through login.
    #[error("the backend rejected the credential")]
    Unauthorized,

    /// Booking conflicts (409) carry the backend's explanation so the caller
    /// can show it verbatim.
    #[error("{detail}")]
    Conflict { detail: String },

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Thin typed client over the backend's REST API.
///
/// Holds no session state: the bearer token comes in per call, taken from
/// the latest session snapshot, so a logout mid-flight never leaves a stale
/// credential cached here.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let mut req = self.http.request(method, self.url(path));
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Map a non-2xx response to the error taxonomy, reading the
    /// problem-details body when one is present.
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: ApiErrorBody = response.json().await.unwrap_or_default();
        Err(match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::CONFLICT => ApiError::Conflict {
                detail: body
                    .message()
                    .unwrap_or("This room is already booked for the selected time.")
                    .to_string(),
            },
            _ => ApiError::Api {
                status: status.as_u16(),
                message: body.message().unwrap_or("request failed").to_string(),
            },
        })
    }
}
