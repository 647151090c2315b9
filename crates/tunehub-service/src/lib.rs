//! # tunehub-service
//!
//! Business logic for the public share endpoint. Services follow
//! constructor injection: every collaborator (asset catalog, share store,
//! token signer) is handed in as an `Arc` at construction time.

pub mod share;

pub use share::{Disposition, RequestClassifier, ShareResolver, ShareService, TokenMinter};
