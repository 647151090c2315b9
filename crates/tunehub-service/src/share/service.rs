//! Public share access service.

use std::sync::Arc;

use tracing::info;

use tunehub_auth::jwt::ShareTokenSigner;
use tunehub_core::error::AppError;
use tunehub_core::traits::AssetCatalog;
use tunehub_database::repositories::ShareStore;
use tunehub_entity::share::PublicShare;

use super::classifier::{Disposition, RequestClassifier};
use super::minter::TokenMinter;
use super::resolver::ShareResolver;

/// Opens shares for anonymous visitors.
#[derive(Debug, Clone)]
pub struct ShareService {
    classifier: RequestClassifier,
    resolver: ShareResolver,
    minter: TokenMinter,
}

impl ShareService {
    /// Creates a new share service.
    pub fn new(
        assets: Arc<dyn AssetCatalog>,
        store: Arc<dyn ShareStore>,
        signer: Arc<dyn ShareTokenSigner>,
    ) -> Self {
        Self {
            classifier: RequestClassifier::new(assets),
            resolver: ShareResolver::new(store),
            minter: TokenMinter::new(signer),
        }
    }

    /// Decides whether `id` is a UI asset or a share id.
    pub fn classify(&self, id: &str) -> Result<Disposition, AppError> {
        self.classifier.classify(id)
    }

    /// Loads the share `id` and returns its public projection.
    pub async fn open_share(&self, id: &str) -> Result<PublicShare, AppError> {
        let share = self.resolver.resolve(id).await?;
        let share_id = share.id.clone();
        let visits = share.visit_count;

        let public = self.minter.project(share)?;

        info!(
            share_id = %share_id,
            tracks = public.tracks.len(),
            visits,
            "Share opened"
        );
        Ok(public)
    }
}
