//! In-memory collaborators for share tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};

use tunehub_auth::jwt::{PublicTokenDecoder, PublicTokenEncoder, ShareTokenSigner, TrackGrant};
use tunehub_core::error::AppError;
use tunehub_core::result::AppResult;
use tunehub_database::repositories::ShareStore;
use tunehub_entity::share::{Share, ShareTrack};

pub(crate) const SECRET: &[u8] = b"service-test-secret";
pub(crate) const ISSUER: &str = "tunehub";

pub(crate) fn signer() -> Arc<PublicTokenEncoder> {
    Arc::new(PublicTokenEncoder::from_secret(SECRET, ISSUER))
}

pub(crate) fn decoder() -> PublicTokenDecoder {
    PublicTokenDecoder::from_secret(SECRET, ISSUER)
}

/// Decodes a token payload without verifying it, to inspect the raw keys.
pub(crate) fn raw_payload(token: &str) -> serde_json::Value {
    let payload = token.split('.').nth(1).unwrap();
    serde_json::from_slice(&URL_SAFE_NO_PAD.decode(payload).unwrap()).unwrap()
}

pub(crate) fn share_with_tracks(id: &str, track_ids: &[&str], expires_at: DateTime<Utc>) -> Share {
    Share {
        id: id.to_string(),
        description: "Shared by tests".to_string(),
        expires_at,
        format: String::new(),
        max_bit_rate: 0,
        visit_count: 0,
        last_visited_at: None,
        created_at: Utc::now(),
        tracks: track_ids
            .iter()
            .enumerate()
            .map(|(position, t)| ShareTrack {
                id: t.to_string(),
                title: format!("Title {}", position + 1),
                artist: "Artist".to_string(),
                album: "Album".to_string(),
                duration_seconds: 180,
            })
            .collect(),
    }
}

/// A store holding at most one share, or failing every call.
pub(crate) struct FakeStore {
    share: Option<Share>,
    failure: Option<AppError>,
    calls: AtomicUsize,
}

impl FakeStore {
    pub(crate) fn empty() -> Self {
        Self {
            share: None,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_share(share: Share) -> Self {
        Self {
            share: Some(share),
            ..Self::empty()
        }
    }

    pub(crate) fn failing(error: AppError) -> Self {
        Self {
            failure: Some(error),
            ..Self::empty()
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ShareStore for FakeStore {
    async fn load_share(&self, id: &str) -> AppResult<Share> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        match &self.share {
            Some(share) if share.id == id => Ok(share.clone()),
            _ => Err(AppError::not_found("no such share")),
        }
    }
}

/// Signs the first `succeed` tokens, then fails.
pub(crate) struct FailingSigner {
    inner: PublicTokenEncoder,
    succeed: usize,
    attempts: AtomicUsize,
}

impl FailingSigner {
    pub(crate) fn after(succeed: usize, secret: &[u8]) -> Self {
        Self {
            inner: PublicTokenEncoder::from_secret(secret, ISSUER),
            succeed,
            attempts: AtomicUsize::new(0),
        }
    }

    pub(crate) fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl ShareTokenSigner for FailingSigner {
    fn mint(&self, expires_at: DateTime<Utc>, grant: &TrackGrant) -> Result<String, AppError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt >= self.succeed {
            return Err(AppError::internal("signing key unavailable"));
        }
        self.inner.mint(expires_at, grant)
    }
}
