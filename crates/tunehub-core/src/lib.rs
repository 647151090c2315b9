//! # tunehub-core
//!
//! Core crate for TuneHub. Contains configuration schemas, the traits
//! implemented by the outer crates, and the unified error system.
//!
//! This crate has **no** internal dependencies on other TuneHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
