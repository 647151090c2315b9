//! Repository implementations.

pub mod share;

pub use share::{ShareRepository, ShareStore};
