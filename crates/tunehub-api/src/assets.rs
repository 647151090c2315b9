//! Static UI bundle on disk.

use std::path::{Component, Path, PathBuf};

use axum::body::Body;
use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use tunehub_core::traits::AssetCatalog;

/// The built web UI, served from a directory.
#[derive(Debug, Clone)]
pub struct AssetBundle {
    root: PathBuf,
}

impl AssetBundle {
    /// Creates a bundle rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The bundle directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `name` inside the bundle, refusing anything that could
    /// escape the root.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        let contained = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        if !contained {
            return None;
        }
        Some(self.root.join(relative))
    }

    /// Serves the file `name`, honouring conditional and range headers.
    ///
    /// Callers are expected to have checked [`AssetCatalog::exists`] first.
    pub async fn serve(&self, name: &str, request: Request<Body>) -> Response {
        let Some(path) = self.resolve(name) else {
            return axum::http::StatusCode::NOT_FOUND.into_response();
        };

        match ServeFile::new(path).oneshot(request).await {
            Ok(response) => response.into_response(),
            Err(never) => match never {},
        }
    }
}

impl AssetCatalog for AssetBundle {
    fn exists(&self, name: &str) -> bool {
        self.resolve(name).is_some_and(|path| path.is_file())
    }
}
