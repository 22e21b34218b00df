//! User repository - lookup and creation for account records.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// The sign-up flow needs exactly two operations: a lookup by email
/// and a create. Accounts are never mutated or deleted here.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by email address (exact match on the stored value)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Create a new user with an already-hashed credential
    async fn create(&self, name: String, email: String, password_hash: String) -> AppResult<User>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(&self, name: String, email: String, password_hash: String) -> AppResult<User> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            email: Set(email),
            password_hash: Set(password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match active_model.insert(&self.db).await {
            Ok(model) => Ok(User::from(model)),
            // The unique index on email is the authority for uniqueness;
            // a violation here means another request won the race after
            // the service-level fast-path check passed.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::DuplicateEmail)
            }
            Err(sea_orm::DbErr::RecordNotInserted) => Err(AppError::StoreCreateFailed),
            Err(e) => Err(AppError::from(e)),
        }
    }
}
