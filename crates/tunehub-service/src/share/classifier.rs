//! Decides whether a share path names a UI asset or a share.

use std::sync::Arc;

use tunehub_core::error::AppError;
use tunehub_core::traits::AssetCatalog;

/// Outcome of classifying a share path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// The segment names a static UI file; serve it as-is.
    Asset,
    /// The segment should be looked up as a share id.
    ShareCandidate(String),
}

/// Classifies incoming share path segments.
#[derive(Debug, Clone)]
pub struct RequestClassifier {
    assets: Arc<dyn AssetCatalog>,
}

impl RequestClassifier {
    /// Creates a classifier over the given asset catalog.
    pub fn new(assets: Arc<dyn AssetCatalog>) -> Self {
        Self { assets }
    }

    /// Classifies `id`. An empty id is a client error.
    pub fn classify(&self, id: &str) -> Result<Disposition, AppError> {
        if id.is_empty() {
            return Err(AppError::validation("invalid id"));
        }

        if self.assets.exists(id) {
            Ok(Disposition::Asset)
        } else {
            Ok(Disposition::ShareCandidate(id.to_string()))
        }
    }
}
