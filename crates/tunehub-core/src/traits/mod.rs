//! Core traits defined in `tunehub-core` and implemented by other crates.

pub mod asset;

pub use asset::AssetCatalog;
