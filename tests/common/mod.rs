//! Shared test support: an in-memory user store.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use globalsource_api::domain::User;
use globalsource_api::errors::{AppError, AppResult};
use globalsource_api::infra::UserRepository;

/// In-memory user store that mirrors the real store's semantics,
/// including the unique-email constraint, with switches to simulate
/// store-level failures.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
    fail_lookups: AtomicBool,
    fail_creates: AtomicBool,
    miss_lookups: AtomicBool,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every lookup fail as if the store were unreachable.
    pub fn fail_lookups(&self) {
        self.fail_lookups.store(true, Ordering::SeqCst);
    }

    /// Make every create fail as if the store produced no record.
    pub fn fail_creates(&self) {
        self.fail_creates.store(true, Ordering::SeqCst);
    }

    /// Make every lookup miss while the unique constraint stays in
    /// force, as for the loser of a check-then-act race.
    pub fn miss_lookups(&self) {
        self.miss_lookups.store(true, Ordering::SeqCst);
    }

    /// Number of stored records with the given email.
    pub fn count_by_email(&self, email: &str) -> usize {
        self.users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.email == email)
            .count()
    }

    /// Total number of stored records.
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    /// Fetch a stored record by email.
    pub fn get(&self, email: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }
}

#[async_trait]
impl UserRepository for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(AppError::internal("store unreachable"));
        }
        if self.miss_lookups.load(Ordering::SeqCst) {
            return Ok(None);
        }
        Ok(self.get(email))
    }

    async fn create(&self, name: String, email: String, password_hash: String) -> AppResult<User> {
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(AppError::StoreCreateFailed);
        }

        let mut users = self.users.lock().unwrap();
        // Unique index semantics: exact match on the stored value
        if users.iter().any(|u| u.email == email) {
            return Err(AppError::DuplicateEmail);
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }
}
