//! Share domain entities.

pub mod model;
pub mod public;

pub use model::{Share, ShareTrack};
pub use public::PublicShare;
