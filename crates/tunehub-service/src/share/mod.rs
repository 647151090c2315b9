//! Public share access: classify the request, resolve the share, mint track tokens.

pub mod classifier;
pub mod minter;
pub mod resolver;
pub mod service;

#[cfg(test)]
pub(crate) mod testing;

pub use classifier::{Disposition, RequestClassifier};
pub use minter::TokenMinter;
pub use resolver::ShareResolver;
pub use service::ShareService;

/// Message returned to clients for unknown or expired shares.
pub const SHARE_NOT_FOUND: &str = "Share not found";

/// Message attached to server-side failures while opening a share.
pub const SHARE_RETRIEVAL_FAILED: &str = "Error retrieving share";
