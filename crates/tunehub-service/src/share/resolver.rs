//! Loads a share and sorts failures into not-found and internal.

use std::sync::Arc;

use tracing::{error, warn};

use tunehub_core::error::{AppError, ErrorKind};
use tunehub_database::repositories::ShareStore;
use tunehub_entity::share::Share;

use super::{SHARE_NOT_FOUND, SHARE_RETRIEVAL_FAILED};

/// Resolves share ids to live shares.
///
/// Every call goes to the store: shares can expire or disappear between
/// two requests, so nothing is cached and nothing is retried.
#[derive(Clone)]
pub struct ShareResolver {
    store: Arc<dyn ShareStore>,
}

impl std::fmt::Debug for ShareResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShareResolver").finish_non_exhaustive()
    }
}

impl ShareResolver {
    /// Creates a resolver over the given share store.
    pub fn new(store: Arc<dyn ShareStore>) -> Self {
        Self { store }
    }

    /// Loads the share `id`.
    ///
    /// Unknown and expired shares yield [`ErrorKind::NotFound`]; any other
    /// store failure yields [`ErrorKind::Internal`] with the cause attached
    /// as the error source.
    pub async fn resolve(&self, id: &str) -> Result<Share, AppError> {
        match self.store.load_share(id).await {
            Ok(share) if share.is_expired() => {
                warn!(
                    share_id = %id,
                    expires_at = %share.expires_at,
                    "Store returned an expired share"
                );
                Err(AppError::not_found(SHARE_NOT_FOUND))
            }
            Ok(share) => Ok(share),
            Err(e) if e.is_not_found() => {
                warn!(share_id = %id, "Share not found");
                Err(AppError::not_found(SHARE_NOT_FOUND))
            }
            Err(e) => {
                error!(share_id = %id, error = %e.detail(), "Error retrieving share");
                Err(AppError::with_source(
                    ErrorKind::Internal,
                    SHARE_RETRIEVAL_FAILED,
                    e,
                ))
            }
        }
    }
}
