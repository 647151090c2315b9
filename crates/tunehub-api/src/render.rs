//! Turns a public share into the page a visitor sees.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};

use tunehub_core::error::{AppError, ErrorKind};
use tunehub_entity::share::PublicShare;

use crate::assets::AssetBundle;

/// Global the UI reads the share from.
const SHARE_GLOBAL: &str = "window.__TUNEHUB_SHARE__";

/// Renders a resolved share into an HTTP response.
#[async_trait]
pub trait ShareRenderer: Send + Sync + std::fmt::Debug + 'static {
    /// Builds the response for `share`.
    async fn render(&self, share: &PublicShare) -> Result<Response, AppError>;
}

/// Serves the UI's `index.html` with the share embedded as a script global.
#[derive(Debug, Clone)]
pub struct IndexPageRenderer {
    assets: Arc<AssetBundle>,
}

impl IndexPageRenderer {
    /// Creates a renderer using the bundle's `index.html`.
    pub fn new(assets: Arc<AssetBundle>) -> Self {
        Self { assets }
    }
}

#[async_trait]
impl ShareRenderer for IndexPageRenderer {
    async fn render(&self, share: &PublicShare) -> Result<Response, AppError> {
        let index_path = self.assets.root().join("index.html");
        let index = tokio::fs::read_to_string(&index_path).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Failed to read index.html", e)
        })?;

        let page = embed_share(&index, share)?;
        Ok(([(header::CACHE_CONTROL, "no-store")], Html(page)).into_response())
    }
}

/// Inserts the share as a `<script>` right before `</head>`, or at the top
/// of the page when there is no head.
pub fn embed_share(index: &str, share: &PublicShare) -> Result<String, AppError> {
    // `<` is escaped so the payload can never close the script element.
    let json = serde_json::to_string(share)?.replace('<', "\\u003c");
    let script = format!("<script>{SHARE_GLOBAL} = {json};</script>");

    Ok(match index.find("</head>") {
        Some(pos) => {
            let mut page = String::with_capacity(index.len() + script.len());
            page.push_str(&index[..pos]);
            page.push_str(&script);
            page.push_str(&index[pos..]);
            page
        }
        None => format!("{script}{index}"),
    })
}
