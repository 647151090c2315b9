//! # tunehub-entity
//!
//! Domain entity models for TuneHub. Every struct in this crate
//! represents a database row or a domain value object. Database
//! entities derive `sqlx::FromRow`.

pub mod share;
