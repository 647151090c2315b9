//! Share token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use tunehub_core::config::AuthConfig;
use tunehub_core::error::AppError;

use super::claims::PublicTokenClaims;

/// Verifies share tokens minted by [`super::PublicTokenEncoder`].
#[derive(Clone)]
pub struct PublicTokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for PublicTokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicTokenDecoder")
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

impl PublicTokenDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::from_secret(
            config.share_token_secret.as_bytes(),
            &config.share_token_issuer,
        )
    }

    /// Creates a decoder from a raw secret.
    pub fn from_secret(secret: &[u8], issuer: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // A share token is dead at its `exp` second, not one second later.
        validation.leeway = 0;
        validation.reject_tokens_expiring_in_less_than = 1;
        validation.set_issuer(&[issuer]);

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Decodes and validates a share token string.
    pub fn decode(&self, token: &str) -> Result<PublicTokenClaims, AppError> {
        let token_data = decode::<PublicTokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::authentication("Token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::authentication("Invalid token signature")
                }
                jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                    AppError::authentication("Invalid token issuer")
                }
                _ => AppError::authentication("Invalid token"),
            })?;

        Ok(token_data.claims)
    }
}
