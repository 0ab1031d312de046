//! Signed-in session carried to the API client.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Bearer token issued by the backend at sign-in.
    #[serde(default)]
    pub token: String,
}

impl SessionConfig {
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty()
    }
}
