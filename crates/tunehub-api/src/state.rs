//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use tunehub_core::config::AppConfig;
use tunehub_service::share::ShareService;

use crate::assets::AssetBundle;
use crate::render::ShareRenderer;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Nothing in here is
/// mutated after startup, so clones are shared freely across requests.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Static UI bundle
    pub assets: Arc<AssetBundle>,
    /// Share classification, resolution, and token minting
    pub share_service: Arc<ShareService>,
    /// Page renderer for opened shares
    pub renderer: Arc<dyn ShareRenderer>,
}
