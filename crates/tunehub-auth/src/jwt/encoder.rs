//! Share token creation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use tunehub_core::config::AuthConfig;
use tunehub_core::error::{AppError, ErrorKind};

use super::claims::{PublicTokenClaims, TrackGrant};

/// Mints capability tokens for shared tracks.
///
/// Implementations must make tokens unforgeable and impossible to extend
/// without the signing secret.
pub trait ShareTokenSigner: Send + Sync + 'static {
    /// Signs `grant` into a token that expires at `expires_at`.
    fn mint(&self, expires_at: DateTime<Utc>, grant: &TrackGrant) -> Result<String, AppError>;
}

/// Creates HS256-signed share tokens.
#[derive(Clone)]
pub struct PublicTokenEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Value of the `iss` claim.
    issuer: String,
}

impl std::fmt::Debug for PublicTokenEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicTokenEncoder")
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

impl PublicTokenEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        if !config.has_secret() {
            return Err(AppError::configuration("Share token secret is not set"));
        }
        Ok(Self::from_secret(
            config.share_token_secret.as_bytes(),
            &config.share_token_issuer,
        ))
    }

    /// Creates an encoder from a raw secret.
    pub fn from_secret(secret: &[u8], issuer: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            issuer: issuer.to_string(),
        }
    }
}

impl ShareTokenSigner for PublicTokenEncoder {
    fn mint(&self, expires_at: DateTime<Utc>, grant: &TrackGrant) -> Result<String, AppError> {
        if expires_at <= Utc::now() {
            return Err(AppError::internal(
                "Refusing to mint a token that is already expired",
            ));
        }

        let claims = PublicTokenClaims {
            iss: self.issuer.clone(),
            exp: expires_at.timestamp(),
            grant: grant.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to sign share token", e))
    }
}
