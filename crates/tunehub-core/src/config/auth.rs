//! Share token signing configuration.

use serde::{Deserialize, Serialize};

/// Settings for the capability tokens minted for shared tracks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for share token signing (HMAC-SHA256).
    ///
    /// Left empty, a random secret is generated at startup and every
    /// token becomes invalid when the process restarts.
    #[serde(default)]
    pub share_token_secret: String,
    /// Value of the `iss` claim in every share token.
    #[serde(default = "default_issuer")]
    pub share_token_issuer: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            share_token_secret: String::new(),
            share_token_issuer: default_issuer(),
        }
    }
}

impl AuthConfig {
    /// Whether a signing secret was provided by configuration.
    pub fn has_secret(&self) -> bool {
        !self.share_token_secret.trim().is_empty()
    }
}

fn default_issuer() -> String {
    "tunehub".to_string()
}
