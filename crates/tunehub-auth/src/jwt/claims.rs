//! Claims carried by share track tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The access a share grants on a single track.
///
/// Optional fields are omitted from the token entirely when unset, so a
/// token never carries an empty format or a zero bitrate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackGrant {
    /// Durable id of the media file the token unlocks.
    pub id: String,
    /// Transcoding format to stream with.
    #[serde(rename = "f", default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Bitrate ceiling in kbps.
    #[serde(rename = "b", default, skip_serializing_if = "Option::is_none")]
    pub max_bit_rate: Option<i32>,
}

impl TrackGrant {
    /// A grant for the given track with no overrides.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            format: None,
            max_bit_rate: None,
        }
    }

    /// Adds a transcoding format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Adds a bitrate ceiling.
    pub fn with_max_bit_rate(mut self, max_bit_rate: i32) -> Self {
        self.max_bit_rate = Some(max_bit_rate);
        self
    }
}

/// Full JWT payload of a share track token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicTokenClaims {
    /// Issuer.
    pub iss: String,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// The granted access.
    #[serde(flatten)]
    pub grant: TrackGrant,
}

impl PublicTokenClaims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}
