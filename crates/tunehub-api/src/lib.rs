//! # tunehub-api
//!
//! HTTP layer for TuneHub built on Axum.
//!
//! Serves public shares under the configured share path, falls back to the
//! static UI bundle for asset names, and maps domain errors to responses
//! that never expose internal detail.

pub mod app;
pub mod assets;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod router;
pub mod state;

pub use app::{build_app, serve};
pub use state::AppState;
