//! Share token encoding, decoding, and claims.

pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod secret;

pub use claims::{PublicTokenClaims, TrackGrant};
pub use decoder::PublicTokenDecoder;
pub use encoder::{PublicTokenEncoder, ShareTokenSigner};
