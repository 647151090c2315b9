//! Shared test helpers for the share endpoint tests.
//!
//! Each test file compiles this module separately, hence the
//! `#[allow(dead_code)]` markers.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use tunehub_api::assets::AssetBundle;
use tunehub_api::render::IndexPageRenderer;
use tunehub_api::{AppState, build_app};
use tunehub_auth::jwt::{PublicTokenDecoder, PublicTokenEncoder, ShareTokenSigner, TrackGrant};
use tunehub_core::config::{
    AppConfig, AssetsConfig, AuthConfig, DatabaseConfig, LoggingConfig, ServerConfig,
};
use tunehub_core::error::AppError;
use tunehub_core::result::AppResult;
use tunehub_database::ShareStore;
use tunehub_entity::share::{Share, ShareTrack};
use tunehub_service::share::ShareService;

pub const SECRET: &[u8] = b"integration-test-secret";
pub const ISSUER: &str = "tunehub";
pub const INDEX_HTML: &str =
    "<!doctype html><html><head><title>TuneHub</title></head><body><div id=\"root\"></div></body></html>";

/// Marker preceding the embedded share JSON in a rendered page.
const SHARE_MARKER: &str = "window.__TUNEHUB_SHARE__ = ";

/// In-memory share store that counts lookups.
#[derive(Default)]
pub struct MemoryShareStore {
    shares: Vec<Share>,
    failure: Option<AppError>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl MemoryShareStore {
    pub fn with_shares(shares: Vec<Share>) -> Self {
        Self {
            shares,
            ..Default::default()
        }
    }

    pub fn failing(error: AppError) -> Self {
        Self {
            failure: Some(error),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ShareStore for MemoryShareStore {
    async fn load_share(&self, id: &str) -> AppResult<Share> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        self.shares
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Share not found"))
    }
}

/// Signer that counts calls and can be told to refuse every token.
pub struct CountingSigner {
    inner: PublicTokenEncoder,
    broken: bool,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl CountingSigner {
    pub fn working() -> Self {
        Self {
            inner: PublicTokenEncoder::from_secret(SECRET, ISSUER),
            broken: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::working()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ShareTokenSigner for CountingSigner {
    fn mint(&self, expires_at: DateTime<Utc>, grant: &TrackGrant) -> Result<String, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.broken {
            return Err(AppError::internal("HSM unreachable at 10.0.0.7"));
        }
        self.inner.mint(expires_at, grant)
    }
}

/// Response captured from a test request.
#[allow(dead_code)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub text: String,
}

#[allow(dead_code)]
impl TestResponse {
    /// Parses the body as JSON.
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text).expect("response body is not JSON")
    }

    /// Extracts the share embedded in a rendered page.
    pub fn embedded_share(&self) -> Value {
        let start = self
            .text
            .find(SHARE_MARKER)
            .expect("page has no embedded share")
            + SHARE_MARKER.len();
        let end = self.text[start..]
            .find(";</script>")
            .expect("embedded share is not terminated")
            + start;
        serde_json::from_str(&self.text[start..end]).expect("embedded share is not JSON")
    }

    /// The track ids (tokens) of the embedded share, in order.
    pub fn track_tokens(&self) -> Vec<String> {
        self.embedded_share()["tracks"]
            .as_array()
            .expect("tracks is not an array")
            .iter()
            .map(|t| t["id"].as_str().expect("track id").to_string())
            .collect()
    }
}

/// Test application context
#[allow(dead_code)]
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    pub store: Arc<MemoryShareStore>,
    pub signer: Arc<CountingSigner>,
    _assets_dir: TempDir,
}

#[allow(dead_code)]
impl TestApp {
    /// Creates an app serving `shares` with a working signer.
    pub fn new(shares: Vec<Share>) -> Self {
        Self::with_parts(
            MemoryShareStore::with_shares(shares),
            CountingSigner::working(),
        )
    }

    /// Creates an app from an explicit store and signer.
    pub fn with_parts(store: MemoryShareStore, signer: CountingSigner) -> Self {
        let assets_dir = tempfile::tempdir().expect("Failed to create temp directory");
        write_bundle(&assets_dir);

        let config = AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url: "postgres://unused@localhost/tunehub_test".to_string(),
                max_connections: 1,
                min_connections: 0,
                connect_timeout_seconds: 1,
                idle_timeout_seconds: 1,
            },
            auth: AuthConfig {
                share_token_secret: String::from_utf8_lossy(SECRET).into_owned(),
                share_token_issuer: ISSUER.to_string(),
            },
            assets: AssetsConfig {
                directory: assets_dir.path().display().to_string(),
                share_path: "/share".to_string(),
            },
            logging: LoggingConfig::default(),
        };

        let store = Arc::new(store);
        let signer = Arc::new(signer);
        let assets = Arc::new(AssetBundle::new(assets_dir.path()));
        let share_service = Arc::new(ShareService::new(
            assets.clone(),
            store.clone(),
            signer.clone(),
        ));
        let renderer = Arc::new(IndexPageRenderer::new(assets.clone()));

        let state = AppState {
            config: Arc::new(config),
            assets,
            share_service,
            renderer,
        };

        Self {
            router: build_app(state),
            store,
            signer,
            _assets_dir: assets_dir,
        }
    }

    /// Sends a GET request to `uri`.
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            headers,
            text: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

fn write_bundle(dir: &TempDir) {
    let root = dir.path();
    std::fs::write(root.join("index.html"), INDEX_HTML).expect("write index.html");
    std::fs::write(root.join("favicon.ico"), b"\x00\x00\x01\x00").expect("write favicon");
    std::fs::create_dir_all(root.join("static/js")).expect("create static/js");
    std::fs::write(root.join("static/js/main.js"), "console.log('tunehub');")
        .expect("write main.js");
}

/// Decoder matching the test signer.
#[allow(dead_code)]
pub fn decoder() -> PublicTokenDecoder {
    PublicTokenDecoder::from_secret(SECRET, ISSUER)
}

/// Token payload as raw JSON, without verification.
#[allow(dead_code)]
pub fn raw_payload(token: &str) -> Value {
    let payload = token.split('.').nth(1).expect("token has no payload");
    let bytes = URL_SAFE_NO_PAD.decode(payload).expect("payload is not base64");
    serde_json::from_slice(&bytes).expect("payload is not JSON")
}

/// A share `id` holding `track_ids`, expiring at `expires_at`.
#[allow(dead_code)]
pub fn share(id: &str, track_ids: &[&str], expires_at: DateTime<Utc>) -> Share {
    Share {
        id: id.to_string(),
        description: format!("Mixtape {id}"),
        expires_at,
        format: String::new(),
        max_bit_rate: 0,
        visit_count: 0,
        last_visited_at: None,
        created_at: Utc::now(),
        tracks: track_ids
            .iter()
            .enumerate()
            .map(|(position, t)| ShareTrack {
                id: t.to_string(),
                title: format!("Song {}", position + 1),
                artist: "The Testers".to_string(),
                album: "Fixtures".to_string(),
                duration_seconds: 240,
            })
            .collect(),
    }
}
