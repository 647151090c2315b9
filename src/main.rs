//! TuneHub Server: public share endpoint
//!
//! Main entry point that wires all crates together and starts the server.

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use tunehub_api::assets::AssetBundle;
use tunehub_api::render::IndexPageRenderer;
use tunehub_api::state::AppState;
use tunehub_auth::jwt::PublicTokenEncoder;
use tunehub_auth::jwt::secret::generate_secret;
use tunehub_core::config::AppConfig;
use tunehub_core::error::AppError;
use tunehub_database::{DatabasePool, ShareRepository};
use tunehub_service::share::ShareService;

#[tokio::main]
async fn main() {
    let env = std::env::var("TUNEHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match load_configuration(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e.detail(), "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from `config/default.toml`, the `config/{env}.toml`
/// overlay, and `TUNEHUB_*` environment variables
fn load_configuration(env: &str) -> Result<AppConfig, AppError> {
    let dir = std::env::var("TUNEHUB_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    AppConfig::load_from(Path::new(&dir), env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(mut config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting TuneHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Signing secret ───────────────────────────────────
    if !config.auth.has_secret() {
        tracing::warn!(
            "No share token secret configured; generated a random one. \
             Share links minted now stop working after a restart"
        );
        config.auth.share_token_secret = generate_secret();
    }
    let token_encoder = Arc::new(PublicTokenEncoder::new(&config.auth)?);

    // ── Step 2: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;
    db.migrate().await?;
    let share_repo = Arc::new(ShareRepository::new(db.pool().clone()));

    // ── Step 3: Static UI bundle ─────────────────────────────────
    let assets = Arc::new(AssetBundle::new(&config.assets.directory));
    if !assets.root().join("index.html").is_file() {
        tracing::warn!(
            directory = %assets.root().display(),
            "UI bundle has no index.html; opened shares will fail to render"
        );
    }

    // ── Step 4: Services and state ───────────────────────────────
    let share_service = Arc::new(ShareService::new(
        assets.clone(),
        share_repo,
        token_encoder,
    ));
    let renderer = Arc::new(IndexPageRenderer::new(Arc::clone(&assets)));

    let state = AppState {
        config: Arc::new(config),
        assets,
        share_service,
        renderer,
    };

    // ── Step 5: Serve ────────────────────────────────────────────
    let result = tunehub_api::serve(state).await;
    db.close().await;
    result
}
