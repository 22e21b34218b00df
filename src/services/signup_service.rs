//! Sign-up service - Orchestrates account creation.
//!
//! One lookup, at most one write per request. The lookup is a
//! fast-path for a friendlier conflict message; the unique index on
//! email remains the authority (see the users migration).

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Sign-up service trait for dependency injection.
#[async_trait]
pub trait SignupService: Send + Sync {
    /// Register a new account. Fails with `DuplicateEmail` when the
    /// address is already taken; the raw password never leaves this
    /// call unhashed.
    async fn sign_up(&self, name: String, email: String, password: String) -> AppResult<User>;
}

/// Concrete implementation of SignupService backed by the user store.
pub struct Registrar {
    users: Arc<dyn UserRepository>,
}

impl Registrar {
    /// Create new sign-up service instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl SignupService for Registrar {
    async fn sign_up(&self, name: String, email: String, password: String) -> AppResult<User> {
        // Presence of all fields is validated by the handler's
        // ValidatedJson extractor before we get here.
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::DuplicateEmail);
        }

        let password_hash = Password::new(&password)?.into_string();
        let user = self.users.create(name, email, password_hash).await?;

        tracing::info!(user_id = %user.id, "account created");
        Ok(user)
    }
}
