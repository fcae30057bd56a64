use serde::Deserialize;

/// Problem-details style body the backend attaches to error responses.
///
/// All fields are optional: some middleware in front of the API replies
/// with an empty body, and the client must not choke on that.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
}

impl ApiErrorBody {
    /// Best human-readable message: `detail` over `title`.
    pub fn message(&self) -> Option<&str> {
        self.detail.as_deref().or(self.title.as_deref())
    }
}
