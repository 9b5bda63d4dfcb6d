use serde::{Deserialize, Serialize};

/// JSON error body returned by the service for non-2xx responses.
/// Only `message` is shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
}
