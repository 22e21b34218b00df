//! Infrastructure layer - External systems integration
//!
//! Handles database connections, migrations, and the repository
//! abstraction over the user store.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
