//! Share entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A media file referenced by a share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ShareTrack {
    /// Durable media file identifier.
    pub id: String,
    /// Track title.
    pub title: String,
    /// Track artist.
    pub artist: String,
    /// Album the track belongs to.
    pub album: String,
    /// Duration in whole seconds.
    pub duration_seconds: i32,
}

/// A grant of temporary, anonymous access to a set of tracks.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Share {
    /// Opaque external identifier used in share URLs.
    pub id: String,
    /// Free-text description, display only.
    pub description: String,
    /// The share and every token minted from it are invalid from this instant on.
    pub expires_at: DateTime<Utc>,
    /// Transcoding format override (empty = none).
    pub format: String,
    /// Bitrate ceiling in kbps (0 = none).
    pub max_bit_rate: i32,
    /// How many times the share has been opened.
    pub visit_count: i64,
    /// Last time the share was opened.
    pub last_visited_at: Option<DateTime<Utc>>,
    /// When the share was created.
    pub created_at: DateTime<Utc>,
    /// Shared tracks, in display order.
    #[sqlx(skip)]
    pub tracks: Vec<ShareTrack>,
}

impl Share {
    /// Whether the share is expired at the given instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Whether the share is expired right now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// The transcoding format override, if one is set.
    pub fn format_override(&self) -> Option<&str> {
        if self.format.is_empty() {
            None
        } else {
            Some(&self.format)
        }
    }

    /// The bitrate ceiling, if one is set.
    pub fn bit_rate_ceiling(&self) -> Option<i32> {
        if self.max_bit_rate == 0 {
            None
        } else {
            Some(self.max_bit_rate)
        }
    }
}
