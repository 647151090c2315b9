//! Client-facing projection of a share.

use serde::{Deserialize, Serialize};

use super::model::ShareTrack;

/// What an anonymous visitor gets to see of a share.
///
/// Track ids in a `PublicShare` are capability tokens, never the durable
/// media ids held in [`super::Share`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicShare {
    /// Free-text description chosen by the share owner.
    pub description: String,
    /// Tracks in display order.
    pub tracks: Vec<ShareTrack>,
}
