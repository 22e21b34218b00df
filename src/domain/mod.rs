//! Domain layer - Core business entities and logic
//!
//! Contains the core domain models independent of infrastructure
//! concerns: the User entity and the Password value object.

pub mod password;
pub mod user;

pub use password::Password;
pub use user::{SignUpRequest, User, UserResponse};
