//! # tunehub-auth
//!
//! Capability tokens for publicly shared tracks.
//!
//! ## Modules
//!
//! - `jwt`: share token claims, signing, verification, and secret generation

pub mod jwt;

pub use jwt::{
    PublicTokenClaims, PublicTokenDecoder, PublicTokenEncoder, ShareTokenSigner, TrackGrant,
};
