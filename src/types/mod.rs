//! Shared types for DRY compliance.

mod response;

pub use response::{ApiResponse, ErrorDetail};
