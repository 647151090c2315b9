//! Response bodies.

pub mod response;

pub use response::{ApiErrorResponse, ApiResponse, HealthResponse};
