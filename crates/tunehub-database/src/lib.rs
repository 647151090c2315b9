//! # tunehub-database
//!
//! PostgreSQL connection management and the share repository backing the
//! public share endpoint.

pub mod connection;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{ShareRepository, ShareStore};
