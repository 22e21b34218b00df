//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Unique account identifier; compared exact-match, no normalization
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user from already-hashed credentials
    pub fn new(id: Uuid, name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Sign-up request body.
///
/// Fields default to empty strings so an absent field and an empty one
/// fail validation the same way, with a single shared message.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SignUpRequest {
    /// User display name
    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are necessary."))]
    #[schema(example = "Ann Lee")]
    pub name: String,
    /// User email address
    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are necessary."))]
    #[schema(example = "ann@x.com")]
    pub email: String,
    /// User password (hashed before storage, never returned)
    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are necessary."))]
    #[schema(example = "secret123")]
    pub password: String,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// User display name
    #[schema(example = "Ann Lee")]
    pub name: String,
    /// User email address
    #[schema(example = "ann@x.com")]
    pub email: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
