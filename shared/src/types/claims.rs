use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Claims embedded in the bearer token the booking backend issues at login.
///
/// The client never verifies the token signature. Every API call is
/// re-checked server-side, so these claims only decide what the client
/// *shows* (identity, menu entries, which routes admit), never what the
/// backend *permits*. A forged token buys a confused UI and a wall of 401s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Standard JWT subject: the account id on the backend.
    pub sub: String,

    /// Display name. Absent on accounts created before the profile fields
    /// existed; the email stands in (see `Identity::from_claims`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Account email, always present.
    pub email: String,

    /// Role string as issued by the backend (`"Admin"`, `"Manager"`,
    /// `"User"`). Absent on older tokens, which are treated as `"User"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Standard JWT expiry (Unix timestamp, seconds).
    pub exp: u64,
}

impl TokenClaims {
    /// Expiry converted to milliseconds since the Unix epoch.
    pub fn expires_at_millis(&self) -> u128 {
        u128::from(self.exp) * 1000
    }

    /// Whether the token has lapsed at `now`.
    ///
    /// Expiry is the session store's check, not the codec's: a token that
    /// parses but has lapsed is treated exactly like one that never parsed.
    pub fn is_expired_at(&self, now: SystemTime) -> bool {
        let now_millis = now
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        self.expires_at_millis() < now_millis
    }
}
