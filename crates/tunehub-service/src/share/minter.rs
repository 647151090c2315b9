//! Replaces durable track ids with expiring capability tokens.

use std::sync::Arc;

use tracing::error;

use tunehub_auth::jwt::{ShareTokenSigner, TrackGrant};
use tunehub_core::error::{AppError, ErrorKind};
use tunehub_entity::share::{PublicShare, Share, ShareTrack};

use super::SHARE_RETRIEVAL_FAILED;

/// Projects shares into their public, token-bearing form.
#[derive(Clone)]
pub struct TokenMinter {
    signer: Arc<dyn ShareTokenSigner>,
}

impl std::fmt::Debug for TokenMinter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenMinter").finish_non_exhaustive()
    }
}

impl TokenMinter {
    /// Creates a minter that signs with `signer`.
    pub fn new(signer: Arc<dyn ShareTokenSigner>) -> Self {
        Self { signer }
    }

    /// The grant `share` gives on `track`: the track id, plus the share's
    /// format and bitrate ceiling when they are set.
    pub fn grant_for(share: &Share, track: &ShareTrack) -> TrackGrant {
        let mut grant = TrackGrant::new(track.id.clone());
        if let Some(format) = share.format_override() {
            grant = grant.with_format(format);
        }
        if let Some(max_bit_rate) = share.bit_rate_ceiling() {
            grant = grant.with_max_bit_rate(max_bit_rate);
        }
        grant
    }

    /// Builds the public projection of `share`.
    ///
    /// Each track keeps its position and display fields; its id becomes a
    /// token expiring with the share. If any token fails to sign, the whole
    /// projection fails and nothing is returned.
    pub fn project(&self, share: Share) -> Result<PublicShare, AppError> {
        let mut tracks = Vec::with_capacity(share.tracks.len());

        for track in &share.tracks {
            let grant = Self::grant_for(&share, track);
            let token = self.signer.mint(share.expires_at, &grant).map_err(|e| {
                error!(share_id = %share.id, error = %e.detail(), "Failed to mint share track token");
                AppError::with_source(ErrorKind::Internal, SHARE_RETRIEVAL_FAILED, e)
            })?;

            tracks.push(ShareTrack {
                id: token,
                ..track.clone()
            });
        }

        Ok(PublicShare {
            description: share.description,
            tracks,
        })
    }
}
