//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::services::{Registrar, SignupService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Sign-up service
    pub signup_service: Arc<dyn SignupService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state wired to the real user store.
    pub fn from_database(database: Arc<Database>) -> Self {
        let users = Arc::new(UserStore::new(database.get_connection()));
        let signup_service = Arc::new(Registrar::new(users));

        Self {
            signup_service,
            database,
        }
    }

    /// Create application state with a manually injected service
    /// (used by tests to substitute stores and services).
    pub fn new(signup_service: Arc<dyn SignupService>, database: Arc<Database>) -> Self {
        Self {
            signup_service,
            database,
        }
    }
}
