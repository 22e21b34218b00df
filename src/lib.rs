//! GlobalSource Connect API - User sign-up service
//!
//! This crate provides the HTTP API behind the GlobalSource Connect
//! landing page: a sign-up endpoint backed by PostgreSQL, with a
//! uniform response envelope for every reply.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared types (response envelope)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, User};
pub use errors::{AppError, AppResult};
